//! Errors surfaced on the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::i18n::Locale;
use crate::render::render_not_found;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),

    #[error("Page not found: {path}")]
    NotFound { path: String, locale: Locale },

    #[error("Failed to render page")]
    Render(#[from] std::fmt::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::UnknownLocale(_) | SiteError::NotFound { .. } => StatusCode::NOT_FOUND,
            SiteError::Render(_) | SiteError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Locale the error page is rendered in.
    fn page_locale(&self) -> Locale {
        match self {
            SiteError::NotFound { locale, .. } => *locale,
            _ => Locale::default(),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
            return (status, "Internal Server Error").into_response();
        }

        debug!("{}", self);
        match render_not_found(self.page_locale()) {
            Ok(page) => (status, Html(page)).into_response(),
            Err(e) => {
                error!("Failed to render not-found page: {}", e);
                status.into_response()
            }
        }
    }
}
