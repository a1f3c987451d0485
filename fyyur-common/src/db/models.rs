//! Database models
//!
//! Row types map one-to-one onto the `Venue` and `Artist` tables; shows are
//! only ever read joined with one side or both.
//! Input types carry every mutable column; ids are assigned by SQLite.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub website: Option<String>,
    pub seeking_description: Option<String>,
}

/// Mutable venue columns, used for both insert and full-overwrite update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Mutable artist columns, used for both insert and full-overwrite update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub website: Option<String>,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: Option<String>,
}

/// Venue or artist with its total number of linked shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NamedShowCount {
    pub id: i64,
    pub name: Option<String>,
    pub show_count: i64,
}

/// Venue location with its total number of linked shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VenueLocation {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub show_count: i64,
}

/// One show seen from a venue or artist page.
///
/// `id`, `name` and `image_link` describe the other side of the show:
/// the artist on a venue page, the venue on an artist page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LinkedShow {
    pub id: i64,
    pub name: Option<String>,
    pub image_link: Option<String>,
    pub start_time: String,
}

/// Denormalized row of the show feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}
