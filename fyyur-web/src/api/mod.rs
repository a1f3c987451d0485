//! HTTP handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::Path;
use axum::Form;
use fyyur_common::form::FormData;

pub use artists::artist_routes;
pub use health::health_routes;
pub use home::{home, not_found};
pub use shows::show_routes;
pub use venues::venue_routes;

use crate::PageError;

/// Extract an integer record id; anything else is a 404 like an unknown route
pub(crate) fn record_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, PageError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| PageError::NotFound(rejection.body_text()))
}

/// Submitted form pairs; a body that is not url-encoded becomes an
/// `InvalidInput` error so submissions fail the same way bad input does
pub(crate) fn form_data(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> fyyur_common::Result<FormData> {
    form.map(|Form(pairs)| FormData::from(pairs))
        .map_err(|rejection| fyyur_common::Error::InvalidInput(rejection.body_text()))
}
