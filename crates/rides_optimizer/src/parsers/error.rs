use thiserror::Error;

use crate::problem::position::Position;

/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing line {line}")]
    MissingLine { line: usize },

    #[error("Line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: {position} is outside the {rows}x{cols} grid")]
    OutOfGrid {
        line: usize,
        position: Position,
        rows: u64,
        cols: u64,
    },

    #[error("Line {line}: invalid integer '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("Line {line}: declared {declared} rides but listed {actual}")]
    MalformedSubmission {
        line: usize,
        declared: usize,
        actual: usize,
    },
}
