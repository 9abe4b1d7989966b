//! # u-citydist
//!
//! Triangular inter-city distance tables: load them from text, look up
//! distances by city name, derive reduced tables for a subset of cities,
//! and print them as an aligned grid. Meant as the distance source for
//! routing and tour-building code.
//!
//! ## Modules
//!
//! - [`distance`] — Symmetric matrix with lower-triangular storage
//! - [`models`] — Named distance table and initial-based city selection
//! - [`loader`] — Parsing tables from strings, readers, and files
//! - [`render`] — Fixed-width text rendering
//! - [`error`] — Error type shared by all of the above

pub mod distance;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;

pub use error::{Result, TableError};
pub use models::DistanceTable;
