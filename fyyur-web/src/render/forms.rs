//! Create and edit forms
//!
//! Field names match the keys read by `fyyur_common::form`. Edit forms are
//! pre-filled from the stored record.

use axum::response::Html;
use fyyur_common::db::{Artist, Venue};
use fyyur_common::form::CHECKED;

use super::{escape, layout, text};

const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

fn input(label: &str, name: &str, kind: &str, value: &Option<String>) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="{kind}" id="{name}" name="{name}" value="{value}">
"#,
        label = escape(label),
        name = name,
        kind = kind,
        value = text(value),
    )
}

/// State picker; a blank entry stands for NULL and a stored value outside
/// the list is kept as its own option so saving the form does not change it
fn state_select(selected: &Option<String>) -> String {
    let current = selected.as_deref().filter(|s| !s.is_empty());
    let option = |value: &str| {
        let mark = if current == Some(value) { " selected" } else { "" };
        format!("<option value=\"{0}\"{1}>{0}</option>", escape(value), mark)
    };

    let mut options = format!(
        "<option value=\"\"{}></option>",
        if current.is_none() { " selected" } else { "" }
    );
    if let Some(value) = current.filter(|v| !STATES.contains(v)) {
        options.push_str(&option(value));
    }
    options.extend(STATES.iter().map(|state| option(state)));

    format!(
        "<label for=\"state\">State</label>\n<select id=\"state\" name=\"state\">{}</select>\n",
        options
    )
}

fn genres_select(selected: &Option<String>) -> String {
    let chosen: Vec<&str> = selected
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .collect();
    let options: String = GENRES
        .iter()
        .map(|genre| {
            let mark = if chosen.contains(genre) { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>",
                escape(genre),
                mark
            )
        })
        .collect();
    format!(
        "<label for=\"genres\">Genres</label>\n<select id=\"genres\" name=\"genres\" multiple>{}</select>\n",
        options
    )
}

fn checkbox(label: &str, name: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="{value}"{mark}> {label}</label>
"#,
        name = name,
        value = CHECKED,
        mark = if checked { " checked" } else { "" },
        label = escape(label),
    )
}

fn textarea(label: &str, name: &str, value: &Option<String>) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<textarea id=\"{name}\" name=\"{name}\" rows=\"3\">{value}</textarea>\n",
        name = name,
        label = escape(label),
        value = text(value),
    )
}

fn form_page(title: &str, action: &str, fields: &str) -> Html<String> {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{fields}<button type="submit">{title}</button>
</form>
"#,
        title = escape(title),
        action = action,
        fields = fields,
    );
    layout(title, None, &body)
}

/// New-venue form, or the edit form when a venue is given
pub fn venue_form(venue: Option<&Venue>) -> Html<String> {
    let blank = Venue {
        id: 0,
        name: None,
        city: None,
        state: None,
        address: None,
        phone: None,
        image_link: None,
        facebook_link: None,
        genres: None,
        website: None,
        seeking_talent: false,
        seeking_description: None,
    };
    let v = venue.unwrap_or(&blank);

    let fields = [
        input("Name", "name", "text", &v.name),
        input("City", "city", "text", &v.city),
        state_select(&v.state),
        input("Address", "address", "text", &v.address),
        input("Phone", "phone", "tel", &v.phone),
        input("Image Link", "image_link", "url", &v.image_link),
        genres_select(&v.genres),
        input("Facebook Link", "facebook_link", "url", &v.facebook_link),
        input("Website Link", "website_link", "url", &v.website),
        checkbox("Looking for talent", "seeking_talent", v.seeking_talent),
        textarea("Seeking Description", "seeking_description", &v.seeking_description),
    ]
    .concat();

    match venue {
        Some(v) => form_page("Edit Venue", &format!("/venues/{}/edit", v.id), &fields),
        None => form_page("List a new venue", "/venues/create", &fields),
    }
}

/// New-artist form, or the edit form when an artist is given
pub fn artist_form(artist: Option<&Artist>) -> Html<String> {
    let blank = Artist {
        id: 0,
        name: None,
        city: None,
        state: None,
        phone: None,
        genres: None,
        image_link: None,
        facebook_link: None,
        seeking_venue: false,
        website: None,
        seeking_description: None,
    };
    let a = artist.unwrap_or(&blank);

    let fields = [
        input("Name", "name", "text", &a.name),
        input("City", "city", "text", &a.city),
        state_select(&a.state),
        input("Phone", "phone", "tel", &a.phone),
        input("Image Link", "image_link", "url", &a.image_link),
        genres_select(&a.genres),
        input("Facebook Link", "facebook_link", "url", &a.facebook_link),
        input("Website Link", "website_link", "url", &a.website),
        checkbox("Looking for venues", "seeking_venue", a.seeking_venue),
        textarea("Seeking Description", "seeking_description", &a.seeking_description),
    ]
    .concat();

    match artist {
        Some(a) => form_page("Edit Artist", &format!("/artists/{}/edit", a.id), &fields),
        None => form_page("List a new artist", "/artists/create", &fields),
    }
}

/// New-show form; `default_start` pre-fills the start time
pub fn show_form(default_start: &str) -> Html<String> {
    let fields = [
        input("Artist ID", "artist_id", "text", &None),
        input("Venue ID", "venue_id", "text", &None),
        input(
            "Start Time (YYYY-MM-DD HH:MM:SS)",
            "start_time",
            "text",
            &Some(default_start.to_string()),
        ),
    ]
    .concat();
    form_page("List a new show", "/shows/create", &fields)
}
