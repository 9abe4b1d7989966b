//! Named distance table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::TriangularMatrix;
use crate::error::{Result, TableError};
use crate::models::names::{get_initials, select_by_initials};

/// Distances between named cities.
///
/// `names[i]` is city `i`; the matrix holds one distance per unordered pair.
/// Names are unique, and a table is never modified once built: reductions
/// produce a new table.
///
/// # Examples
///
/// ```
/// use u_citydist::models::DistanceTable;
///
/// let table = DistanceTable::from_rows(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![vec![5], vec![3, 4]],
/// ).unwrap();
/// assert_eq!(table.distance("A", "C").unwrap(), 3);
/// assert_eq!(table.distance("C", "B").unwrap(), 4);
///
/// let reduced = table.reduced(&["C", "A"]).unwrap();
/// assert_eq!(reduced.all_cities(), ["C", "A"]);
/// assert_eq!(reduced.row(1), Some(&[3][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct DistanceTable {
    names: Vec<String>,
    distances: TriangularMatrix,
}

#[derive(Deserialize)]
struct RawTable {
    names: Vec<String>,
    distances: TriangularMatrix,
}

impl TryFrom<RawTable> for DistanceTable {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self> {
        DistanceTable::new(raw.names, raw.distances)
    }
}

fn check_non_empty(names: &[String]) -> Result<()> {
    match names.iter().position(String::is_empty) {
        Some(pos) => Err(TableError::EmptyName(pos)),
        None => Ok(()),
    }
}

fn check_unique<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(TableError::DuplicateName(name.to_owned()));
        }
    }
    Ok(())
}

impl DistanceTable {
    /// Pairs city names with a matrix of the same size.
    ///
    /// Fails if the sizes disagree, a name is empty, or a name appears twice.
    pub fn new(names: Vec<String>, distances: TriangularMatrix) -> Result<Self> {
        if names.len() != distances.size() {
            return Err(TableError::SizeMismatch {
                names: names.len(),
                size: distances.size(),
            });
        }
        check_non_empty(&names)?;
        check_unique(&names)?;
        Ok(Self { names, distances })
    }

    /// Builds a table from names and lower-triangular rows `1..n`.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<u64>>) -> Result<Self> {
        let distances = TriangularMatrix::from_rows(names.len(), rows)?;
        Self::new(names, distances)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the table has no cities.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All city names in table order.
    pub fn all_cities(&self) -> &[String] {
        &self.names
    }

    /// The underlying symmetric matrix, indexed like [`all_cities`](Self::all_cities).
    pub fn matrix(&self) -> &TriangularMatrix {
        &self.distances
    }

    /// Stored distances of row `r`: from city `r` to cities `0..r`.
    pub fn row(&self, r: usize) -> Option<&[u64]> {
        self.distances.row(r)
    }

    /// Position of `name` in the table.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| TableError::NotFound(name.to_owned()))
    }

    /// Distance between the cities at positions `i` and `j`.
    pub fn distance_by_index(&self, i: usize, j: usize) -> Result<u64> {
        let size = self.len();
        for index in [i, j] {
            if index >= size {
                return Err(TableError::IndexOutOfRange { index, size });
            }
        }
        self.distances
            .get(i, j)
            .ok_or_else(|| TableError::SelfDistance(self.names[i].clone()))
    }

    /// Distance between two named cities, in either order.
    ///
    /// Fails with [`TableError::NotFound`] for an unknown name and with
    /// [`TableError::SelfDistance`] when both names are the same city.
    pub fn distance(&self, a: &str, b: &str) -> Result<u64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.distance_by_index(i, j)
    }

    /// Leading character of every city, in table order.
    pub fn initials(&self) -> String {
        get_initials(&self.names)
    }

    /// Cities selected by the characters of `filter`, in filter order.
    pub fn cities(&self, filter: &str) -> Result<Vec<String>> {
        select_by_initials(&self.names, filter)
    }

    /// Builds a table restricted to `subset`, in the order given.
    ///
    /// Every pairwise distance is looked up in this table. The subset must
    /// name distinct cities that exist here.
    pub fn reduced<S: AsRef<str>>(&self, subset: &[S]) -> Result<DistanceTable> {
        check_unique(subset)?;
        let indices = subset
            .iter()
            .map(|name| self.index_of(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let distances = TriangularMatrix::try_from_fn(indices.len(), |r, c| {
            self.distance_by_index(indices[r], indices[c])
        })?;
        let names: Vec<String> = subset.iter().map(|s| s.as_ref().to_owned()).collect();
        debug!(from = self.len(), to = names.len(), "reduced distance table");

        Ok(DistanceTable { names, distances })
    }

    /// Builds a table of the cities selected by the initials in `filter`.
    ///
    /// Each character picks the first city starting with it; the result
    /// follows the order of `filter`.
    pub fn filtered(&self, filter: &str) -> Result<DistanceTable> {
        let cities = self.cities(filter)?;
        self.reduced(&cities)
    }
}
