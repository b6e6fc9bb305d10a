use askama::{Error as AskamaError, Template};
use axum::http::StatusCode;
use thiserror::Error;

use crate::application::error::HttpError;

use super::primitives::Markup;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

#[derive(Clone, Debug)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
}

/// Full HTML document wrapping the assembled sections.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub meta: PageMetaView,
    pub top_anchor: &'static str,
    pub client_script_url: Option<String>,
    pub background: Markup,
    pub sections: Vec<Markup>,
}
