//! Persistence and REST layer for the report builder UI.
//!
//! Reports are named, ordered lists of JSON layout blocks; sample data is a
//! fixed catalog of text, image, table and chart snippets seeded on demand.

pub mod database;
pub mod errors;
pub mod services;

#[cfg(feature = "server")]
pub mod server;
