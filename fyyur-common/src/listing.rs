//! Listing aggregation
//!
//! Pure transforms from query results into the view models the pages render:
//! venues grouped by city, name search, and the past/upcoming split on
//! detail pages.
//!
//! `num_upcoming_shows` counts every linked show regardless of start time.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::models::{Artist, LinkedShow, NamedShowCount, Venue, VenueLocation};
use crate::time::{is_past, parse_start_time};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: Option<String>,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueArea {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by city, keeping first-seen order of cities and venues.
///
/// The area's state is the state of the first venue seen in that city.
pub fn group_venues_by_city(rows: Vec<VenueLocation>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.show_count,
        };

        match areas.iter_mut().find(|area| area.city == row.city) {
            Some(area) => area.venues.push(summary),
            None => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// Case-insensitive substring match on record names.
///
/// Records without a name never match.
pub fn search_by_name(query: &str, rows: Vec<NamedShowCount>) -> SearchResults {
    let needle = query.to_lowercase();

    let data: Vec<SearchHit> = rows
        .into_iter()
        .filter_map(|row| {
            let name = row.name?;
            name.to_lowercase().contains(&needle).then(|| SearchHit {
                id: row.id,
                name,
                num_upcoming_shows: row.show_count,
            })
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}

/// Shows of one venue or artist split around the request time
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShowSplit {
    pub past_shows: Vec<LinkedShow>,
    pub upcoming_shows: Vec<LinkedShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Classify shows as past (`start < now`) or upcoming.
///
/// Fails on the first start time that does not match the storage format.
pub fn split_shows(shows: Vec<LinkedShow>, now: &NaiveDateTime) -> Result<ShowSplit> {
    let mut split = ShowSplit::default();

    for show in shows {
        let start = parse_start_time(&show.start_time)?;
        if is_past(&start, now) {
            split.past_shows.push(show);
        } else {
            split.upcoming_shows.push(show);
        }
    }

    split.past_shows_count = split.past_shows.len();
    split.upcoming_shows_count = split.upcoming_shows.len();
    Ok(split)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<LinkedShow>, now: &NaiveDateTime) -> Result<Self> {
        Ok(Self {
            venue,
            shows: split_shows(shows, now)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSplit,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<LinkedShow>, now: &NaiveDateTime) -> Result<Self> {
        Ok(Self {
            artist,
            shows: split_shows(shows, now)?,
        })
    }
}
