//! Show feed and submissions

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};
use fyyur_common::db::{shows, ShowInput};
use fyyur_common::time;
use tracing::warn;

use super::form_data;
use crate::render::{self, Flash};
use crate::{AppState, PageResult};

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let feed = shows::list_show_feed(&state.db).await?;
    Ok(render::shows::list(&feed))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    render::forms::show_form(&time::format_start_time(&time::now()))
}

/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let created = match form_data(form).and_then(|form| ShowInput::from_form(&form)) {
        Ok(input) => shows::create_show(&state.db, &input).await,
        Err(e) => Err(e),
    };

    match created {
        Ok(_) => render::home::page(Some(Flash::success("Show was successfully listed!"))),
        Err(e) => {
            warn!("Show could not be listed, rolled back: {}", e);
            render::home::page(Some(Flash::error("Show could not be listed!")))
        }
    }
}
