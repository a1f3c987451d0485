//! Home page

use axum::response::Html;

use super::{layout, Flash};

pub fn page(flash: Option<Flash>) -> Html<String> {
    let body = r#"
<h1>Fyyur</h1>
<p>Find venues to play and artists to book.</p>
<ul class="items">
    <li><a href="/venues/create">List a new venue</a></li>
    <li><a href="/artists/create">List a new artist</a></li>
    <li><a href="/shows/create">List a new show</a></li>
</ul>
"#;
    layout("Home", flash.as_ref(), body)
}
