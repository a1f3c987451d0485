//! Artist pages

use axum::response::Html;
use fyyur_common::db::ArtistSummary;
use fyyur_common::listing::ArtistDetail;

use super::shows::linked_shows;
use super::{genre_tags, layout, text};

pub fn list(artists: &[ArtistSummary]) -> Html<String> {
    let items: String = artists
        .iter()
        .map(|artist| {
            format!(
                "<li><a href=\"/artists/{}\">{}</a></li>\n",
                artist.id,
                text(&artist.name)
            )
        })
        .collect();

    let body = if artists.is_empty() {
        r#"<h1>Artists</h1><p>No artists listed yet. <a href="/artists/create">List one</a>.</p>"#
            .to_string()
    } else {
        format!("<h1>Artists</h1>\n<ul class=\"items\">\n{}</ul>\n", items)
    };
    layout("Artists", None, &body)
}

pub fn detail(detail: &ArtistDetail) -> Html<String> {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            text(&artist.seeking_description)
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<div class="profile">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
<p><a href="{website}">{website}</a></p>
<p><a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Artist image">
<p><a href="/artists/{id}/edit">Edit artist</a></p>
</div>
{past}
{upcoming}
"#,
        name = text(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = text(&artist.city),
        state = text(&artist.state),
        phone = text(&artist.phone),
        website = text(&artist.website),
        facebook = text(&artist.facebook_link),
        seeking = seeking,
        image = text(&artist.image_link),
        past = linked_shows("Past Shows", &detail.shows.past_shows, "/venues"),
        upcoming = linked_shows("Upcoming Shows", &detail.shows.upcoming_shows, "/venues"),
    );

    layout(artist.name.as_deref().unwrap_or("Artist"), None, &body)
}
