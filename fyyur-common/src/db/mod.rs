//! Database models and queries

pub mod artists;
pub mod init;
pub mod migrations;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use migrations::*;
pub use models::*;
