//! Spreadsheet engine API.
//!
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Entry`] - Classification of raw entry text (blank, literal, formula, text)
//! - [`Formula`], [`Term`] - Additive formulas split into terms
//! - [`evaluate`], [`evaluate_entry`] - Resolve and sum formula terms
//! - [`format_number`], [`parse_number`] - Number text conversion

mod cell_ref;
mod entry;
mod eval;
mod format;
mod formula;

pub use cell_ref::CellRef;
pub use entry::{Entry, MIN_FORMULA_LEN, is_formula};
pub use eval::{CellSource, Evaluation, UnresolvedPolicy, evaluate, evaluate_entry};
pub use format::{format_number, parse_number};
pub use formula::{Formula, Term};
