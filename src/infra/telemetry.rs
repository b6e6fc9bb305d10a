use std::sync::Once;

use metrics::{Unit, describe_counter, describe_histogram};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

pub const PAGE_RENDERS_TOTAL: &str = "autoscale_page_renders_total";
pub const NAV_PARTIALS_TOTAL: &str = "autoscale_nav_partials_total";
pub const CONTACT_PARTIALS_TOTAL: &str = "autoscale_contact_partials_total";
pub const PAGE_RENDER_MS: &str = "autoscale_page_render_ms";

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
///
/// Log lines go to stderr so `render` can stream the document on stdout.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            PAGE_RENDERS_TOTAL,
            Unit::Count,
            "Total number of full landing page renders."
        );
        describe_counter!(
            NAV_PARTIALS_TOTAL,
            Unit::Count,
            "Total number of navigation header partials served."
        );
        describe_counter!(
            CONTACT_PARTIALS_TOTAL,
            Unit::Count,
            "Total number of contact section partials served."
        );
        describe_histogram!(
            PAGE_RENDER_MS,
            Unit::Milliseconds,
            "Landing page render latency in milliseconds."
        );
    });
}
