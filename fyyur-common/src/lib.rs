//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking-listing service:
//! - Database models, schema creation and migrations
//! - Venue, artist and show queries
//! - Listing aggregation (venues by city, search, past/upcoming split)
//! - Form input mapping for create/edit submissions
//! - Configuration loading
//! - Start-time parsing and display formatting

pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod listing;
pub mod time;

pub use error::{Error, Result};
