//! Loading distance tables from text.

mod reader;

pub use reader::{load_table, parse_table, read_table};
