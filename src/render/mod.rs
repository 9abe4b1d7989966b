//! Text rendering of distance tables.

mod grid;

pub use grid::{render, render_with_width, FIELD_WIDTH};
