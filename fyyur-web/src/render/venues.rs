//! Venue pages

use axum::response::Html;
use fyyur_common::listing::{VenueArea, VenueDetail};

use super::shows::linked_shows;
use super::{genre_tags, layout, text};

/// Venues grouped by city
pub fn list(areas: &[VenueArea]) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>\n");

    if areas.is_empty() {
        body.push_str(r#"<p>No venues listed yet. <a href="/venues/create">List one</a>.</p>"#);
    }

    for area in areas {
        body.push_str(&format!(
            "<section class=\"area\">\n<h2>{}, {}</h2>\n<ul class=\"items\">\n",
            text(&area.city),
            text(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="num-upcoming-shows">{}</span></li>
"#,
                venue.id,
                text(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n</section>\n");
    }

    layout("Venues", None, &body)
}

/// Venue profile with past and upcoming shows
pub fn detail(detail: &VenueDetail) -> Html<String> {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            text(&venue.seeking_description)
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<div class="profile">
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
<p><a href="{website}">{website}</a></p>
<p><a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Venue image">
<p><a href="/venues/{id}/edit">Edit venue</a></p>
</div>
{past}
{upcoming}
"#,
        name = text(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = text(&venue.address),
        city = text(&venue.city),
        state = text(&venue.state),
        phone = text(&venue.phone),
        website = text(&venue.website),
        facebook = text(&venue.facebook_link),
        seeking = seeking,
        image = text(&venue.image_link),
        past = linked_shows("Past Shows", &detail.shows.past_shows, "/artists"),
        upcoming = linked_shows("Upcoming Shows", &detail.shows.upcoming_shows, "/artists"),
    );

    layout(venue.name.as_deref().unwrap_or("Venue"), None, &body)
}
