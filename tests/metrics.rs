mod support;

use std::collections::HashSet;

use metrics_util::debugging::DebuggingRecorder;

use support::{get, get_datastar, router};

#[tokio::test]
async fn page_and_partials_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    get(router(true), "/").await;
    get_datastar(router(true), "/ui/nav?menu=open").await;
    get_datastar(router(true), "/ui/contact").await;

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(composite_key, _, _, _)| composite_key.key().name().to_string())
        .collect();

    let expected = [
        "autoscale_page_renders_total",
        "autoscale_page_render_ms",
        "autoscale_nav_partials_total",
        "autoscale_contact_partials_total",
    ];
    for name in expected {
        assert!(names.contains(name), "missing metric {name}");
    }
}
