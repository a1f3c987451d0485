//! Artist pages and submissions

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use fyyur_common::db::{artists, ArtistInput};
use fyyur_common::form::FormData;
use fyyur_common::listing::{search_by_name, ArtistDetail};
use fyyur_common::time;
use tracing::warn;

use super::{form_data, record_id};
use crate::render::{self, Flash};
use crate::{AppState, PageError, PageResult};

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/:artist_id", get(show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = artists::list_artists(&state.db).await?;
    Ok(render::artists::list(&artists))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let form = FormData::from(pairs);
    let term = form.get("search_term").unwrap_or_default();
    let results = search_by_name(term, artists::list_artist_show_counts(&state.db).await?);
    Ok(render::search::results(render::search::Target::Artists, term, &results))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let artist_id = record_id(path)?;
    let artist = artists::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;
    let shows = artists::list_artist_shows(&state.db, artist_id).await?;

    let detail = ArtistDetail::new(artist, shows, &time::now())?;
    Ok(render::artists::detail(&detail))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    render::forms::artist_form(None)
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let (name, created) = match form_data(form) {
        Ok(form) => {
            let input = ArtistInput::from_form(&form);
            let created = artists::create_artist(&state.db, &input).await;
            (input.name.unwrap_or_default(), created)
        }
        Err(e) => (String::new(), Err(e)),
    };

    match created {
        Ok(_) => render::home::page(Some(Flash::success(format!(
            "Artist {} was successfully listed!",
            name
        )))),
        Err(e) => {
            warn!("Artist {:?} could not be listed, rolled back: {}", name, e);
            render::home::page(Some(Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            ))))
        }
    }
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Html<String>> {
    let artist_id = record_id(path)?;
    let artist = artists::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;
    Ok(render::forms::artist_form(Some(&artist)))
}

/// POST /artists/:artist_id/edit
///
/// Overwrites every column; always returns to the artist page.
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult<Redirect> {
    let artist_id = record_id(path)?;
    let updated = match form_data(form) {
        Ok(form) => {
            let input = ArtistInput::from_form(&form);
            artists::update_artist(&state.db, artist_id, &input).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = updated {
        warn!("Artist {} could not be updated, rolled back: {}", artist_id, e);
    }
    Ok(Redirect::to(&format!("/artists/{}", artist_id)))
}
