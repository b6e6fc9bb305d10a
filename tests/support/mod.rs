#![allow(dead_code)]

use std::sync::Arc;

use autoscale_site::{
    application::clock::{Clock, FixedClock},
    config::SiteSettings,
    infra::http::{HttpState, build_router},
};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const FIXED_YEAR: i32 = 2031;

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(FIXED_YEAR).expect("valid year"))
}

pub fn site(embed_refresh: bool) -> SiteSettings {
    SiteSettings {
        client_script_url: Some("/static/datastar.js".to_string()),
        embed_refresh,
    }
}

pub fn router(embed_refresh: bool) -> Router {
    build_router(HttpState::new(fixed_clock(), &site(embed_refresh)))
}

pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response")
}

pub async fn get_datastar(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(
            Request::get(uri)
                .header("datastar-request", "true")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response")
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.expect("collect body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
