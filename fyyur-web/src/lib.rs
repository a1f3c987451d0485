//! fyyur-web library - booking-listing web service
//!
//! Routes, handlers and HTML rendering over the `fyyur-common` data layer.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod render;

pub use crate::error::{PageError, PageResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::home))
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
