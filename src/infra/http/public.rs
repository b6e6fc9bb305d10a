use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, Request, StatusCode, header::CACHE_CONTROL},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use datastar::prelude::ElementPatchMode;
use metrics::{counter, histogram};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    application::{
        clock::Clock,
        embed::{EmbedRefresh, refresh_script},
        error::HttpError,
        page::LandingPage,
        stream::StreamBuilder,
    },
    config::SiteSettings,
    domain::{anchors::Anchor, state::NavState},
    infra::telemetry::{
        CONTACT_PARTIALS_TOTAL, NAV_PARTIALS_TOTAL, PAGE_RENDER_MS, PAGE_RENDERS_TOTAL,
    },
    presentation::sections::{CONTACT_PARTIAL_PATH, HEADER_ELEMENT_ID, NAV_PARTIAL_PATH},
};

use super::{
    DATASTAR_REQUEST_HEADER,
    middleware::{log_responses, set_request_context},
};

/// Name of the datastar signal mirroring the mobile menu state.
const NAV_SIGNAL: &str = "mobileNavOpen";

#[derive(Clone)]
pub struct HttpState {
    pub clock: Arc<dyn Clock>,
    pub client_script_url: Option<String>,
    pub embed_refresh: Option<EmbedRefresh>,
}

impl HttpState {
    pub fn new(clock: Arc<dyn Clock>, site: &SiteSettings) -> Self {
        Self {
            clock,
            client_script_url: site.client_script_url.clone(),
            embed_refresh: site.embed_refresh.then_some(EmbedRefresh::TALLY),
        }
    }

    fn page(&self, nav: NavState) -> LandingPage {
        LandingPage::assemble(self.clock.as_ref())
            .with_nav(nav)
            .with_client_script(self.client_script_url.clone())
    }
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(NAV_PARTIAL_PATH, get(nav_partial))
        .route(CONTACT_PARTIAL_PATH, get(contact_partial))
        .route("/_health", get(health))
        .fallback(fallback_router)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MenuQuery {
    menu: Option<String>,
}

impl MenuQuery {
    fn nav_state(&self) -> NavState {
        NavState::from_query(self.menu.as_deref())
    }
}

async fn index(
    State(state): State<HttpState>,
    Query(query): Query<MenuQuery>,
) -> Result<Response, HttpError> {
    let started_at = Instant::now();
    let html = state.page(query.nav_state()).render()?;

    counter!(PAGE_RENDERS_TOTAL).increment(1);
    histogram!(PAGE_RENDER_MS).record(started_at.elapsed().as_secs_f64() * 1000.0);

    Ok(Html(html).into_response())
}

async fn nav_partial(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Query(query): Query<MenuQuery>,
) -> Result<Response, HttpError> {
    let page = state.page(query.nav_state());
    let nav = page.nav();
    let header = page.render_header()?;
    counter!(NAV_PARTIALS_TOTAL).increment(1);

    debug!(
        target = "autoscale::http::nav",
        mobile_nav_open = nav.is_open(),
        "serving navigation partial"
    );

    if !is_datastar(&headers) {
        let mut response = Html(header).into_response();
        set_no_store(&mut response);
        return Ok(response);
    }

    let signals = json!({ NAV_SIGNAL: nav.is_open() }).to_string();
    let mut stream = StreamBuilder::new();
    stream
        .push_patch(
            header,
            &format!("#{HEADER_ELEMENT_ID}"),
            ElementPatchMode::Outer,
        )
        .push_signals(&signals);
    Ok(stream.into_response())
}

async fn contact_partial(
    State(state): State<HttpState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let section = state.page(NavState::CLOSED).render_contact()?;
    counter!(CONTACT_PARTIALS_TOTAL).increment(1);

    if !is_datastar(&headers) {
        return Ok(Html(section).into_response());
    }

    let mut stream = StreamBuilder::new();
    stream.push_patch(
        section,
        &format!("#{}", Anchor::Contact.id()),
        ElementPatchMode::Outer,
    );
    if let Some(script) = refresh_script(state.embed_refresh.as_ref()) {
        stream.push_script(script);
    }
    Ok(stream.into_response())
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback_router(request: Request<Body>) -> Response {
    HttpError::new(
        "infra::http::fallback_router",
        StatusCode::NOT_FOUND,
        "Page not found",
        format!("no route for `{}`", request.uri().path()),
    )
    .into_response()
}

fn is_datastar(headers: &HeaderMap) -> bool {
    headers.contains_key(DATASTAR_REQUEST_HEADER)
}

fn set_no_store(response: &mut Response) {
    let value = HeaderValue::from_static("no-store");
    response.headers_mut().insert(CACHE_CONTROL, value);
}
