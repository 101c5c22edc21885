// error.rs - Failure modes of the Game of Life core

use std::fmt;

/// Errors returned by [`Field`](crate::Field) and [`Life`](crate::Life).
///
/// The core never retries; every failure goes straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A direct write addressed a cell outside the grid. Writes never wrap.
    #[error("cell ({row}, {col}) is outside the {height}x{width} field")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// The initial pattern does not match the declared grid size.
    #[error(
        "expected a {expected_rows}x{expected_cols} pattern, got {rows} rows of {cols} columns"
    )]
    InvalidDimensions {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// The text pattern could not be turned into a grid.
    #[error("malformed input: {0}")]
    MalformedInput(Malformed),

    #[error("no built-in pattern named {0:?}")]
    UnknownPattern(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a text pattern was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// No lines at all.
    Empty,
    /// `line` is 0-based; lengths are in characters.
    RaggedLine {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Empty => write!(f, "pattern has no lines"),
            Malformed::RaggedLine { line, expected, found } => write!(
                f,
                "line {} is {} characters long, expected {}",
                line + 1,
                found,
                expected
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
