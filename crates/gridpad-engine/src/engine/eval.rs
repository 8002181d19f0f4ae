//! Formula evaluation.
//!
//! Terms are resolved against a [`CellSource`], which supplies the text a
//! referenced cell currently displays. References are resolved one level
//! deep: a referenced cell that itself holds a formula contributes its
//! displayed result, never its formula.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::cell_ref::CellRef;
use super::format::{format_number, parse_number};
use super::formula::{Formula, Term};
use crate::error::{EvalError, Result};

/// Read access to the displayed text of cells.
pub trait CellSource {
    /// Displayed text of `cell`, or None if the cell is not part of the grid.
    fn cell_text(&self, cell: &CellRef) -> Option<&str>;
}

impl CellSource for HashMap<CellRef, String> {
    fn cell_text(&self, cell: &CellRef) -> Option<&str> {
        self.get(cell).map(String::as_str)
    }
}

/// What to do with a term that cannot be resolved to a number.
///
/// Blank referenced cells are always zero; this only covers missing cells,
/// malformed tokens and non-numeric text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Fail the whole formula and show an error marker.
    #[default]
    Error,
    /// Count the term as zero.
    Zero,
}

/// Outcome of committing an entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// Not a formula; the entry text stays as it is.
    Unchanged,
    /// A formula was evaluated. `display` replaces the entry text and
    /// `formula` is the text to keep for later editing.
    Computed {
        formula: String,
        display: String,
        error: Option<EvalError>,
    },
}

fn resolve_term<S: CellSource + ?Sized>(term: &Term, source: &S) -> Result<f64> {
    match term {
        Term::Literal(n) => Ok(*n),
        Term::Reference(cell) => {
            let text = source
                .cell_text(cell)
                .ok_or_else(|| EvalError::UnknownReference(cell.to_string()))?;
            parse_number(text).ok_or_else(|| EvalError::NotANumber {
                cell: *cell,
                text: text.to_string(),
            })
        }
        Term::Invalid(token) => Err(EvalError::UnknownReference(token.clone())),
    }
}

/// Sum the terms of a formula.
///
/// A sum that overflows to infinity or NaN is an error under either policy.
pub fn evaluate<S: CellSource + ?Sized>(
    formula: &Formula,
    source: &S,
    policy: UnresolvedPolicy,
) -> Result<f64> {
    let mut total = 0.0;
    for term in formula.terms() {
        match resolve_term(term, source) {
            Ok(n) => total += n,
            Err(e) => match policy {
                UnresolvedPolicy::Error => return Err(e),
                UnresolvedPolicy::Zero => {
                    warn!("{}: {}; counting as 0", formula.source(), e);
                }
            },
        }
    }
    if !total.is_finite() {
        return Err(EvalError::OutOfRange(formula.source().to_string()));
    }
    Ok(total)
}

/// Decide what committing `text` does to a cell.
pub fn evaluate_entry<S: CellSource + ?Sized>(
    text: &str,
    source: &S,
    policy: UnresolvedPolicy,
) -> Evaluation {
    let Some(formula) = Formula::parse(text) else {
        return Evaluation::Unchanged;
    };
    match evaluate(&formula, source, policy) {
        Ok(n) => {
            let display = format_number(n);
            debug!("{} = {}", formula.source(), display);
            Evaluation::Computed {
                formula: formula.source().to_string(),
                display,
                error: None,
            }
        }
        Err(e) => {
            warn!("{}: {}", formula.source(), e);
            Evaluation::Computed {
                formula: formula.source().to_string(),
                display: e.marker().to_string(),
                error: Some(e),
            }
        }
    }
}
