//! Error pages

use axum::response::Html;

use super::layout;

pub fn not_found() -> Html<String> {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1><p>Sorry, that page or record does not exist.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error() -> Html<String> {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our end.</p><p><a href="/">Back home</a></p>"#,
    )
}
