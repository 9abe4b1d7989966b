//! Symmetric distance matrix with lower-triangular storage.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A symmetric n×n distance matrix storing one value per unordered pair.
///
/// Only the strict lower triangle is kept: cell `(r, c)` with `r > c` lives
/// at offset `r * (r - 1) / 2 + c`. The diagonal is not stored, so
/// [`get`](Self::get) returns `None` for `i == j`.
///
/// # Examples
///
/// ```
/// use u_citydist::distance::TriangularMatrix;
///
/// let m = TriangularMatrix::from_rows(3, vec![vec![5], vec![3, 4]]).unwrap();
/// assert_eq!(m.get(0, 2), Some(3));
/// assert_eq!(m.get(2, 0), Some(3));
/// assert_eq!(m.get(1, 1), None);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawMatrix", try_from = "RawMatrix")]
pub struct TriangularMatrix {
    data: Vec<u64>,
    size: usize,
}

/// Row-wise wire form; validated on the way back in.
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    size: usize,
    rows: Vec<Vec<u64>>,
}

#[inline]
fn offset(row: usize, col: usize) -> usize {
    row * (row - 1) / 2 + col
}

fn cells(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

impl TriangularMatrix {
    /// Creates a matrix for `size` locations with every distance zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; cells(size)],
            size,
        }
    }

    /// Builds a matrix from rows `1..size`, where row `r` holds the
    /// distances from location `r` to locations `0..r`.
    ///
    /// Fails with [`TableError::RowCountMismatch`] unless exactly
    /// `size - 1` rows are given, and with [`TableError::ShapeMismatch`]
    /// unless row `r` has `r` values.
    pub fn from_rows(size: usize, rows: Vec<Vec<u64>>) -> Result<Self> {
        let expected_rows = size.saturating_sub(1);
        if rows.len() != expected_rows {
            return Err(TableError::RowCountMismatch {
                size,
                expected: expected_rows,
                found: rows.len(),
            });
        }

        let mut data = Vec::with_capacity(cells(size));
        for (i, row) in rows.into_iter().enumerate() {
            let r = i + 1;
            if row.len() != r {
                return Err(TableError::ShapeMismatch {
                    row: r,
                    expected: r,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Builds a matrix by evaluating `f(r, c)` for every stored cell, in
    /// row order.
    pub fn try_from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<u64>,
    {
        let mut data = Vec::with_capacity(cells(size));
        for r in 1..size {
            for c in 0..r {
                data.push(f(r, c)?);
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the distance between locations `i` and `j`, in either order.
    ///
    /// `None` on the diagonal or when either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i == j || i >= self.size || j >= self.size {
            return None;
        }
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        Some(self.data[offset(hi, lo)])
    }

    /// Sets the distance between locations `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, distance: u64) {
        assert!(i != j, "diagonal of a triangular matrix is not stored");
        assert!(i < self.size && j < self.size, "index out of bounds");
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        self.data[offset(hi, lo)] = distance;
    }

    /// Stored distances of row `r` (`r` values; empty for row 0).
    ///
    /// `None` if `r` is out of range.
    pub fn row(&self, r: usize) -> Option<&[u64]> {
        match r {
            _ if r >= self.size => None,
            0 => Some(&self.data[..0]),
            _ => {
                let start = offset(r, 0);
                Some(&self.data[start..start + r])
            }
        }
    }

    /// Iterates over rows `1..size` in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        (1..self.size).map(move |r| {
            let start = offset(r, 0);
            &self.data[start..start + r]
        })
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// `from` itself and out-of-range candidates are skipped. Ties go to
    /// the earliest candidate. Returns `None` if nothing is left.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .filter_map(|&c| self.get(from, c).map(|d| (c, d)))
            .min_by_key(|&(_, d)| d)
            .map(|(c, _)| c)
    }

    /// Length of the closed tour visiting `order` and returning to its start.
    ///
    /// Returns `None` if two consecutive stops are the same location, an
    /// index is out of range, or the total overflows `u64`. A tour of fewer
    /// than two stops has length 0.
    pub fn tour_length(&self, order: &[usize]) -> Option<u64> {
        if order.len() < 2 {
            return if order.iter().all(|&i| i < self.size) {
                Some(0)
            } else {
                None
            };
        }
        let legs = order.windows(2).map(|w| (w[0], w[1]));
        let closing = (order[order.len() - 1], order[0]);
        legs.chain(std::iter::once(closing))
            .try_fold(0u64, |acc, (a, b)| acc.checked_add(self.get(a, b)?))
    }
}

impl From<TriangularMatrix> for RawMatrix {
    fn from(m: TriangularMatrix) -> Self {
        let rows = m.rows().map(<[u64]>::to_vec).collect();
        RawMatrix { size: m.size, rows }
    }
}

impl TryFrom<RawMatrix> for TriangularMatrix {
    type Error = TableError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        TriangularMatrix::from_rows(raw.size, raw.rows)
    }
}
