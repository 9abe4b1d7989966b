//! Aligned text grid for distance tables.

use std::fmt::{self, Write};

use crate::models::DistanceTable;

/// Width of every field in the rendered grid.
pub const FIELD_WIDTH: usize = 9;

fn write_grid<W: Write>(out: &mut W, table: &DistanceTable, width: usize) -> fmt::Result {
    let names = table.all_cities();

    write!(out, "{:width$}", "")?;
    for name in names.iter().take(names.len().saturating_sub(1)) {
        write!(out, " {name:>width$}")?;
    }
    writeln!(out)?;

    for (name, row) in names.iter().skip(1).zip(table.matrix().rows()) {
        write!(out, "{name:>width$}")?;
        for d in row {
            write!(out, " {d:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Renders `table` with the standard field width.
///
/// The header lists every city but the last after a blank gutter; each
/// following line starts with a city name and holds its stored distances,
/// so row `i` carries `i` values.
///
/// # Examples
///
/// ```
/// use u_citydist::loader::parse_table;
/// use u_citydist::render::render;
///
/// let table = parse_table("- A\nB 5\nC 3 4\n").unwrap();
/// let text = render(&table);
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines[0], "                  A         B");
/// assert_eq!(lines[2], "        C         3         4");
/// ```
pub fn render(table: &DistanceTable) -> String {
    render_with_width(table, FIELD_WIDTH)
}

/// Renders `table` right-aligning every field to `width` characters.
pub fn render_with_width(table: &DistanceTable, width: usize) -> String {
    let mut out = String::new();
    write_grid(&mut out, table, width).expect("writing to a String cannot fail");
    out
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, FIELD_WIDTH)
    }
}
