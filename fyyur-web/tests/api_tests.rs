//! Integration tests for fyyur-web routes
//!
//! Each test builds the router over a fresh SQLite file and drives it with
//! `oneshot` requests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use fyyur_common::db::{artists, init_database, shows, venues, ArtistInput, ShowInput, VenueInput};
use fyyur_web::{build_router, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: fresh database in a temporary directory
async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("fyyur.db")).await.unwrap();
    (dir, pool)
}

fn setup_app(db: SqlitePool) -> Router {
    build_router(AppState::new(db))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

async fn seed_venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> i64 {
    venues::create_venue(
        pool,
        &VenueInput {
            name: Some(name.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            ..VenueInput::default()
        },
    )
    .await
    .unwrap()
}

async fn seed_artist(pool: &SqlitePool, name: &str) -> i64 {
    artists::create_artist(
        pool,
        &ArtistInput {
            name: Some(name.to_string()),
            ..ArtistInput::default()
        },
    )
    .await
    .unwrap()
}

async fn seed_show(pool: &SqlitePool, artist_id: i64, venue_id: i64, start_time: &str) {
    shows::create_show(
        pool,
        &ShowInput {
            artist_id,
            venue_id,
            start_time: start_time.to_string(),
        },
    )
    .await
    .unwrap();
}

// =============================================================================
// Health and home
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_page() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"<a href="/venues/create">List a new venue</a>"#));
    assert!(!page.contains("role=\"alert\""));
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venues_grouped_by_city() {
    let (_dir, db) = setup_test_db().await;
    let hop = seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    seed_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    let artist = seed_artist(&db, "Guns N Petals").await;
    seed_show(&db, artist, hop, "2019-05-21 21:30:00").await;
    seed_show(&db, artist, hop, "2099-01-01 20:00:00").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    let sf = page.find("<h2>San Francisco, CA</h2>").unwrap();
    let ny = page.find("<h2>New York, NY</h2>").unwrap();
    assert!(sf < ny);
    assert_eq!(page.matches("<h2>San Francisco, CA</h2>").count(), 1);
    assert!(page.contains(
        r#"<a href="/venues/1">The Musical Hop</a> <span class="num-upcoming-shows">2</span>"#
    ));
    assert!(page.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_search_venues_case_insensitive() {
    let (_dir, db) = setup_test_db().await;
    seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    seed_venue(&db, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    seed_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    let app = setup_app(db);

    let response = app
        .oneshot(post_form("/venues/search", "search_term=MUSIC"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"<span class="result-count">2</span>"#));
    assert!(page.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    assert!(!page.contains("Dueling Pianos"));
}

#[tokio::test]
async fn test_create_venue_persists_checkbox() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db.clone());

    let body = "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
                &genres=Jazz&genres=Reggae&seeking_talent=y\
                &website_link=https%3A%2F%2Fwww.themusicalhop.com";
    let response = app
        .oneshot(post_form("/venues/create", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Venue The Musical Hop was successfully listed!"));

    let venue = venues::get_venue(&db, 1).await.unwrap().unwrap();
    assert!(venue.seeking_talent);
    assert_eq!(venue.genres.as_deref(), Some("Jazz,Reggae"));
    assert_eq!(venue.website.as_deref(), Some("https://www.themusicalhop.com"));
    assert_eq!(venue.phone, None);
}

#[tokio::test]
async fn test_venue_detail_splits_shows() {
    let (_dir, db) = setup_test_db().await;
    let venue = seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&db, "Guns N Petals").await;
    seed_show(&db, artist, venue, "2019-05-21 21:30:00").await;
    seed_show(&db, artist, venue, "2099-01-01 20:00:00").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("<h2>Past Shows (1)</h2>"));
    assert!(page.contains("<h2>Upcoming Shows (1)</h2>"));
    assert!(page.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));
    assert!(page.contains("Tue 05, 21, 2019 9:30PM"));
}

#[tokio::test]
async fn test_edit_venue_overwrites_and_redirects() {
    let (_dir, db) = setup_test_db().await;
    venues::create_venue(
        &db,
        &VenueInput {
            name: Some("The Musical Hop".to_string()),
            city: Some("San Francisco".to_string()),
            state: Some("CA".to_string()),
            phone: Some("123-123-1234".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for a local artist".to_string()),
            ..VenueInput::default()
        },
    )
    .await
    .unwrap();
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form("/venues/1/edit", "name=The+Hop&city=Austin"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/venues/1");

    let venue = venues::get_venue(&db, 1).await.unwrap().unwrap();
    assert_eq!(venue.name.as_deref(), Some("The Hop"));
    assert_eq!(venue.city.as_deref(), Some("Austin"));
    assert_eq!(venue.state, None);
    assert_eq!(venue.phone, None);
    assert_eq!(venue.seeking_description, None);
    assert!(!venue.seeking_talent);
}

#[tokio::test]
async fn test_edit_venue_form_prefilled() {
    let (_dir, db) = setup_test_db().await;
    venues::create_venue(
        &db,
        &VenueInput {
            name: Some("The Dueling Pianos Bar".to_string()),
            city: Some("New York".to_string()),
            state: Some("NY".to_string()),
            genres: Some("Classical,R&B".to_string()),
            seeking_talent: true,
            ..VenueInput::default()
        },
    )
    .await
    .unwrap();
    let app = setup_app(db);

    let response = app.oneshot(get("/venues/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"action="/venues/1/edit""#));
    assert!(page.contains(r#"name="name" value="The Dueling Pianos Bar""#));
    assert!(page.contains(r#"<option value="NY" selected>NY</option>"#));
    assert!(page.contains(r#"<option value="Classical" selected>Classical</option>"#));
    assert!(page.contains(r#"name="seeking_talent" value="y" checked"#));
}

#[tokio::test]
async fn test_create_venue_without_form_body_flashes_error() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/venues/create")
        .body(Body::from("name=The+Musical+Hop"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("could not be listed."));
    assert!(venues::get_venue(&db, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unparsable_stored_start_time() {
    let (_dir, db) = setup_test_db().await;
    seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    seed_artist(&db, "Guns N Petals").await;
    sqlx::query(
        r#"INSERT INTO "Show" (start_time, artist_id, venue_id) VALUES ('2019-05-21T21:30:00.000Z', 1, 1)"#,
    )
    .execute(&db)
    .await
    .unwrap();
    let app = setup_app(db);

    let response = app.clone().oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("<h1>500</h1>"));

    let response = app.oneshot(get("/shows")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = extract_text(response.into_body()).await;
    assert!(page.contains(">2019-05-21T21:30:00.000Z</time>"));
}

#[tokio::test]
async fn test_delete_venue_then_not_found() {
    let (_dir, db) = setup_test_db().await;
    let venue = seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = seed_artist(&db, "Guns N Petals").await;
    seed_show(&db, artist, venue, "2019-05-21 21:30:00").await;
    let app = setup_app(db.clone());

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/venues/1")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(shows::count_shows(&db).await.unwrap(), 0);

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_list_artists() {
    let (_dir, db) = setup_test_db().await;
    seed_artist(&db, "Guns N Petals").await;
    seed_artist(&db, "Matt Quevedo").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/artists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    let first = page.find(r#"<a href="/artists/1">Guns N Petals</a>"#).unwrap();
    let second = page.find(r#"<a href="/artists/2">Matt Quevedo</a>"#).unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_edit_artist_overwrites_and_redirects() {
    let (_dir, db) = setup_test_db().await;
    artists::create_artist(
        &db,
        &ArtistInput {
            name: Some("Guns N Petals".to_string()),
            city: Some("San Francisco".to_string()),
            phone: Some("326-123-5000".to_string()),
            seeking_venue: true,
            ..ArtistInput::default()
        },
    )
    .await
    .unwrap();
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form(
            "/artists/1/edit",
            "name=Guns+N+Roses&city=Los+Angeles&state=CA",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/artists/1");

    let artist = artists::get_artist(&db, 1).await.unwrap().unwrap();
    assert_eq!(artist.name.as_deref(), Some("Guns N Roses"));
    assert_eq!(artist.city.as_deref(), Some("Los Angeles"));
    assert_eq!(artist.phone, None);
    assert!(!artist.seeking_venue);
}

#[tokio::test]
async fn test_edit_artist_form_prefilled() {
    let (_dir, db) = setup_test_db().await;
    seed_artist(&db, "Matt Quevedo").await;
    let app = setup_app(db);

    let response = app.oneshot(get("/artists/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"name="name" value="Matt Quevedo""#));
}

#[tokio::test]
async fn test_search_artists_no_hits() {
    let (_dir, db) = setup_test_db().await;
    seed_artist(&db, "Guns N Petals").await;
    let app = setup_app(db);

    let response = app
        .oneshot(post_form("/artists/search", "search_term=zzz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"<span class="result-count">0</span>"#));
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_create_show_success() {
    let (_dir, db) = setup_test_db().await;
    seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    seed_artist(&db, "Guns N Petals").await;
    let app = setup_app(db.clone());

    let response = app
        .clone()
        .oneshot(post_form(
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Show was successfully listed!"));

    let response = app.oneshot(get("/shows")).await.unwrap();
    let page = extract_text(response.into_body()).await;
    assert!(page.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));
    assert!(page.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
}

#[tokio::test]
async fn test_create_show_unknown_artist_flashes_error() {
    let (_dir, db) = setup_test_db().await;
    seed_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let app = setup_app(db.clone());

    let response = app
        .oneshot(post_form(
            "/shows/create",
            "artist_id=99&venue_id=1&start_time=2035-04-01+20%3A00%3A00",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = extract_text(response.into_body()).await;
    assert!(page.contains("Show could not be listed!"));
    assert_eq!(shows::count_shows(&db).await.unwrap(), 0);
}

// =============================================================================
// Not found
// =============================================================================

#[tokio::test]
async fn test_not_found_cases() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    for uri in ["/venues/42", "/artists/42", "/venues/abc", "/artists/1/edit", "/nowhere"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let page = extract_text(response.into_body()).await;
        assert!(page.contains("<h1>404</h1>"), "{}", uri);
    }
}
