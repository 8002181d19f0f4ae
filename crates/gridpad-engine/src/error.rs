//! Error types for formula evaluation.

use thiserror::Error;

use crate::engine::CellRef;

/// Why a formula term could not be resolved to a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The token is neither a number nor an address of a cell in the grid.
    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    /// The referenced cell's displayed text does not read as a number.
    #[error("{cell} is not a number: {text:?}")]
    NotANumber { cell: CellRef, text: String },

    /// The sum is not a finite number.
    #[error("{0} is out of range")]
    OutOfRange(String),
}

impl EvalError {
    /// Marker text shown in place of the result.
    pub fn marker(&self) -> &'static str {
        match self {
            EvalError::UnknownReference(_) => "#REF!",
            EvalError::NotANumber { .. } => "#VALUE!",
            EvalError::OutOfRange(_) => "#NUM!",
        }
    }
}

/// Whether displayed cell text is one of the evaluation error markers.
pub fn is_error_marker(text: &str) -> bool {
    matches!(text, "#REF!" | "#VALUE!" | "#NUM!")
}

pub type Result<T> = std::result::Result<T, EvalError>;
