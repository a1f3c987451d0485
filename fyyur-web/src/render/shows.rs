//! Show feed and show cards on detail pages

use axum::response::Html;
use fyyur_common::db::{LinkedShow, ShowListing};
use fyyur_common::time::{display_start_time, DisplayStyle};

use super::{escape, layout, text};

/// GET /shows page
pub fn list(feed: &[ShowListing]) -> Html<String> {
    let cards: String = feed
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">
    <img src="{image}" alt="">
    <p><a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a></p>
    <p><time datetime="{raw}">{when}</time></p>
</div>
"#,
                image = text(&show.artist_image_link),
                artist_id = show.artist_id,
                artist = text(&show.artist_name),
                venue_id = show.venue_id,
                venue = text(&show.venue_name),
                raw = escape(&show.start_time),
                when = escape(&display_start_time(&show.start_time, DisplayStyle::Full)),
            )
        })
        .collect();

    let body = if feed.is_empty() {
        r#"<h1>Shows</h1><p>No shows listed yet. <a href="/shows/create">List one</a>.</p>"#
            .to_string()
    } else {
        format!("<h1>Shows</h1>\n{}", cards)
    };
    layout("Shows", None, &body)
}

/// Cards for one side of a detail page's past/upcoming split.
///
/// `link_prefix` is the path of the counterpart record, e.g. `/artists`
/// on a venue page.
pub(crate) fn linked_shows(heading: &str, shows: &[LinkedShow], link_prefix: &str) -> String {
    let cards: String = shows
        .iter()
        .map(|show| {
            format!(
                r#"<div class="show-card">
    <img src="{image}" alt="">
    <p><a href="{prefix}/{id}">{name}</a></p>
    <p><time datetime="{raw}">{when}</time></p>
</div>
"#,
                image = text(&show.image_link),
                prefix = link_prefix,
                id = show.id,
                name = text(&show.name),
                raw = escape(&show.start_time),
                when = escape(&display_start_time(&show.start_time, DisplayStyle::Medium)),
            )
        })
        .collect();

    format!(
        "<section><h2>{} ({})</h2>\n{}</section>\n",
        escape(heading),
        shows.len(),
        cards
    )
}
