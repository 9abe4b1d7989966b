//! Error type shared by loading, lookup, and derivation.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while building or querying a distance table.
#[derive(Error, Debug)]
pub enum TableError {
    /// A row has fewer tokens than its position in the table requires.
    #[error("line {line}: expected at least {expected} tokens, found {found}")]
    Parse {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A distance token is not a non-negative integer.
    #[error("line {line}: invalid distance {token:?}: {source}")]
    Format {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// No entry carries the requested name.
    #[error("city not found: {0}")]
    NotFound(String),

    /// No entry starts with the requested initial.
    #[error("no city with initial {0:?}")]
    InitialNotFound(char),

    /// An initial appears more than once in a filter string.
    #[error("initial {0:?} selected more than once")]
    DuplicateInitial(char),

    /// The same entry was named twice where distinct entries are required.
    #[error("duplicate city: {0}")]
    DuplicateName(String),

    /// The distance of an entry to itself is not stored.
    #[error("no distance stored between {0} and itself")]
    SelfDistance(String),

    /// An index accessor was given a position outside the table.
    #[error("index {index} out of range for table of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Rows handed to the matrix constructor are not lower-triangular.
    #[error("row {row}: expected {expected} distances, found {found}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Rows handed to the matrix constructor do not cover every location.
    #[error("matrix of size {size} needs {expected} rows, found {found}")]
    RowCountMismatch {
        size: usize,
        expected: usize,
        found: usize,
    },

    /// A city name is empty, so it has no initial.
    #[error("city at position {0} has an empty name")]
    EmptyName(usize),

    /// The number of names does not match the matrix size.
    #[error("{names} names given for a matrix of size {size}")]
    SizeMismatch { names: usize, size: usize },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
