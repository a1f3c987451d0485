//! Form input mapping for create/edit submissions
//!
//! Submissions arrive as ordered key/value pairs. Recognized keys map onto
//! record columns; absent keys become `None` so that an edit overwrites
//! every mutable column.

use crate::db::models::{ArtistInput, ShowInput, VenueInput};
use crate::{Error, Result};

/// Form value that marks a checkbox as ticked
pub const CHECKED: &str = "y";

/// Ordered multi-map over a url-encoded form body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted for `key`, in submission order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Multi-select values joined with `,`
    pub fn joined(&self, key: &str) -> Option<String> {
        let values = self.get_all(key);
        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }

    /// Checkbox coercion: only `"y"` is true
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some(CHECKED)
    }

    fn id(&self, key: &str) -> Result<i64> {
        let raw = self
            .get(key)
            .ok_or_else(|| Error::InvalidInput(format!("missing {}", key)))?;
        raw.trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("{} is not an integer id: {:?}", key, raw)))
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

impl VenueInput {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.text("name"),
            city: form.text("city"),
            state: form.text("state"),
            address: form.text("address"),
            phone: form.text("phone"),
            image_link: form.text("image_link"),
            facebook_link: form.text("facebook_link"),
            genres: form.joined("genres"),
            website: form.text("website_link"),
            seeking_talent: form.flag("seeking_talent"),
            seeking_description: form.text("seeking_description"),
        }
    }
}

impl ArtistInput {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.text("name"),
            city: form.text("city"),
            state: form.text("state"),
            phone: form.text("phone"),
            genres: form.joined("genres"),
            image_link: form.text("image_link"),
            facebook_link: form.text("facebook_link"),
            seeking_venue: form.flag("seeking_venue"),
            website: form.text("website_link"),
            seeking_description: form.text("seeking_description"),
        }
    }
}

impl ShowInput {
    pub fn from_form(form: &FormData) -> Result<Self> {
        Ok(Self {
            artist_id: form.id("artist_id")?,
            venue_id: form.id("venue_id")?,
            start_time: form
                .text("start_time")
                .ok_or_else(|| Error::InvalidInput("missing start_time".to_string()))?,
        })
    }
}
