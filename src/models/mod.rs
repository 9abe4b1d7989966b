//! Domain model types for city distance tables.
//!
//! Provides the named table that pairs city names with a triangular
//! matrix, plus helpers for picking cities by their initials.

mod names;
mod table;

pub use names::{get_city, get_initials, initial_of, select_by_initials};
pub use table::DistanceTable;
