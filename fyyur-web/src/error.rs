//! Error types for fyyur-web
//!
//! Handler failures become HTML error pages: 404 for unknown records and
//! routes, 500 for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::render;

/// Page-level error
#[derive(Debug, Error)]
pub enum PageError {
    /// Record or route not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// fyyur-common error
    #[error("Common error: {0}")]
    Common(#[from] fyyur_common::Error),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) | PageError::Common(fyyur_common::Error::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            (status, render::errors::not_found()).into_response()
        } else {
            error!("{}", self);
            (status, render::errors::server_error()).into_response()
        }
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
