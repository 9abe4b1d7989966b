//! Line-oriented reader for triangular distance files.
//!
//! The first line is `<ignored> <name_0>`. Line `i` after it is
//! `<name_i> <d(i,0)> ... <d(i,i-1)>`; tokens beyond the last required
//! distance are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Result, TableError};
use crate::models::DistanceTable;

/// Parses one data row: the city name and its `row` distances.
fn parse_row(line_no: usize, row: usize, tokens: &[&str]) -> Result<(String, Vec<u64>)> {
    let expected = row + 1;
    if tokens.len() < expected {
        return Err(TableError::Parse {
            line: line_no,
            expected,
            found: tokens.len(),
        });
    }

    let distances = tokens[1..expected]
        .iter()
        .map(|token| {
            token.parse::<u64>().map_err(|source| TableError::Format {
                line: line_no,
                token: (*token).to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((tokens[0].to_owned(), distances))
}

/// Reads a distance table from any buffered source.
///
/// Blank lines are skipped. An input with no rows at all yields an empty
/// table.
pub fn read_table<R: BufRead>(reader: R) -> Result<DistanceTable> {
    let mut names = Vec::new();
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if names.is_empty() {
            // header: only the second token names city 0
            if tokens.len() < 2 {
                return Err(TableError::Parse {
                    line: line_no,
                    expected: 2,
                    found: tokens.len(),
                });
            }
            names.push(tokens[1].to_owned());
            continue;
        }

        let (name, distances) = parse_row(line_no, names.len(), &tokens)?;
        trace!(line = line_no, city = %name, "parsed row");
        names.push(name);
        rows.push(distances);
    }

    let table = DistanceTable::from_rows(names, rows)?;
    debug!(cities = table.len(), "loaded distance table");
    Ok(table)
}

/// Parses a distance table held in memory.
///
/// # Examples
///
/// ```
/// use u_citydist::loader::parse_table;
///
/// let table = parse_table("- A\nB 5\nC 3 4\n").unwrap();
/// assert_eq!(table.all_cities(), ["A", "B", "C"]);
/// assert_eq!(table.distance("A", "C").unwrap(), 3);
/// ```
pub fn parse_table(text: &str) -> Result<DistanceTable> {
    read_table(text.as_bytes())
}

/// Opens and reads a distance table file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<DistanceTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening distance table");
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

impl FromStr for DistanceTable {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        parse_table(s)
    }
}
