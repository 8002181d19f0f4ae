//! Commit-time processing of a cell's entry.

use gridpad_engine::engine::{CellRef, Evaluation, evaluate_entry};
use log::debug;

use super::Sheet;

impl Sheet {
    /// Evaluate the entry of `cell` as it loses focus.
    ///
    /// A formula entry is kept as the cell's stored formula and its text is
    /// replaced by the result. Any other entry is left as typed, and a
    /// formula stored by an earlier commit is dropped.
    pub(crate) fn process_cell(&mut self, cell: &CellRef) {
        let Some(input) = self.input(cell) else {
            return;
        };
        let evaluation = evaluate_entry(input.value(), &*self, self.unresolved);

        let Some(input) = self.input_mut(cell) else {
            return;
        };
        match evaluation {
            Evaluation::Unchanged => {
                if input.formula.take().is_some() {
                    debug!("{}: formula replaced by {:?}", cell, input.value);
                }
            }
            Evaluation::Computed {
                formula, display, ..
            } => {
                input.formula = Some(formula);
                input.set_value(display);
            }
        }
    }
}
