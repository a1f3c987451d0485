//! Home page and unknown-route fallback

use axum::{http::StatusCode, response::Html};

use crate::render;

/// GET /
pub async fn home() -> Html<String> {
    render::home::page(None)
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, render::errors::not_found())
}
