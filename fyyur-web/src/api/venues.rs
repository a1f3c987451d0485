//! Venue pages and submissions

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use fyyur_common::db::{venues, VenueInput};
use fyyur_common::form::FormData;
use fyyur_common::listing::{group_venues_by_city, search_by_name, VenueDetail};
use fyyur_common::time;
use tracing::warn;

use super::{form_data, record_id};
use crate::render::{self, Flash};
use crate::{AppState, PageError, PageResult};

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/:venue_id", get(show_venue).delete(delete_venue))
        .route(
            "/venues/:venue_id/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
}

/// GET /venues
///
/// Venues grouped by city
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let rows = venues::list_venue_locations(&state.db).await?;
    Ok(render::venues::list(&group_venues_by_city(rows)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let form = FormData::from(pairs);
    let term = form.get("search_term").unwrap_or_default();
    let results = search_by_name(term, venues::list_venue_show_counts(&state.db).await?);
    Ok(render::search::results(render::search::Target::Venues, term, &results))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let venue_id = record_id(path)?;
    let venue = venues::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;
    let shows = venues::list_venue_shows(&state.db, venue_id).await?;

    let detail = VenueDetail::new(venue, shows, &time::now())?;
    Ok(render::venues::detail(&detail))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    render::forms::venue_form(None)
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let (name, created) = match form_data(form) {
        Ok(form) => {
            let input = VenueInput::from_form(&form);
            let created = venues::create_venue(&state.db, &input).await;
            (input.name.unwrap_or_default(), created)
        }
        Err(e) => (String::new(), Err(e)),
    };

    match created {
        Ok(_) => render::home::page(Some(Flash::success(format!(
            "Venue {} was successfully listed!",
            name
        )))),
        Err(e) => {
            warn!("Venue {:?} could not be listed, rolled back: {}", name, e);
            render::home::page(Some(Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            ))))
        }
    }
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let venue_id = record_id(path)?;
    let venue = venues::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;
    Ok(render::forms::venue_form(Some(&venue)))
}

/// POST /venues/:venue_id/edit
///
/// Overwrites every column; always returns to the venue page.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Redirect> {
    let venue_id = record_id(path)?;
    let updated = match form_data(form) {
        Ok(form) => {
            let input = VenueInput::from_form(&form);
            venues::update_venue(&state.db, venue_id, &input).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = updated {
        warn!("Venue {} could not be updated, rolled back: {}", venue_id, e);
    }
    Ok(Redirect::to(&format!("/venues/{}", venue_id)))
}

/// DELETE /venues/:venue_id
///
/// Removes the venue and its shows.
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<StatusCode> {
    let venue_id = record_id(path)?;
    venues::delete_venue(&state.db, venue_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
