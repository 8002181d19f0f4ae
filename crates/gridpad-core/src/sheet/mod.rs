//! The spreadsheet grid and its event handlers (UI-agnostic).
//!
//! A [`Sheet`] plays the part of the table a page hosts: one header row,
//! one header cell per row, and one [`InputCell`] per address. It is the
//! only owner of focus; front-ends ask [`Sheet::focused`] instead of
//! keeping their own cursor.

mod builder;
mod cell;
mod events;
mod process;

pub use cell::{HeaderCell, InputCell};
pub use events::{Key, KeyOutcome};

use gridpad_engine::engine::{CellRef, CellSource, UnresolvedPolicy};

use crate::error::{GridpadError, Result};
use crate::settings::{Dimensions, Settings};

/// A grid of labeled rows and columns where each cell is a text field.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub(crate) dimensions: Dimensions,
    pub(crate) unresolved: UnresolvedPolicy,
    pub(crate) corner: HeaderCell,
    pub(crate) column_headers: Vec<HeaderCell>,
    pub(crate) row_headers: Vec<HeaderCell>,
    pub(crate) cells: Vec<InputCell>,
    pub(crate) focused: Option<CellRef>,
}

impl Sheet {
    /// Build the standard A-Z by 1-25 sheet.
    pub fn new() -> Self {
        Self::with_dimensions(Dimensions::default())
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        builder::build(dimensions, UnresolvedPolicy::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        builder::build(settings.dimensions, settings.unresolved)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn unresolved_policy(&self) -> UnresolvedPolicy {
        self.unresolved
    }

    pub fn header_row_id(&self) -> &str {
        builder::HEADER_ROW_ID
    }

    pub fn corner(&self) -> &HeaderCell {
        &self.corner
    }

    pub fn column_header(&self, col: usize) -> Option<&HeaderCell> {
        self.column_headers.get(col)
    }

    pub fn row_header(&self, row: usize) -> Option<&HeaderCell> {
        self.row_headers.get(row)
    }

    pub fn column_headers(&self) -> &[HeaderCell] {
        &self.column_headers
    }

    pub fn row_headers(&self) -> &[HeaderCell] {
        &self.row_headers
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.col < self.dimensions.columns && cell.row < self.dimensions.rows
    }

    fn index(&self, cell: &CellRef) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row * self.dimensions.columns + cell.col)
    }

    pub fn input(&self, cell: &CellRef) -> Option<&InputCell> {
        self.index(cell).map(|i| &self.cells[i])
    }

    pub(crate) fn input_mut(&mut self, cell: &CellRef) -> Option<&mut InputCell> {
        self.index(cell).map(|i| &mut self.cells[i])
    }

    /// Look up an input by its identifier ("C7").
    pub fn input_by_id(&self, id: &str) -> Option<&InputCell> {
        CellRef::from_str(id).and_then(|cell| self.input(&cell))
    }

    /// All inputs in document (row-major) order.
    pub fn inputs(&self) -> impl Iterator<Item = &InputCell> {
        self.cells.iter()
    }

    /// Displayed text of a cell.
    pub fn display(&self, cell: &CellRef) -> Option<&str> {
        self.input(cell).map(InputCell::value)
    }

    /// The formula kept for a cell whose last commit was a formula.
    pub fn stored_formula(&self, cell: &CellRef) -> Option<&str> {
        self.input(cell).and_then(InputCell::formula)
    }

    /// The focused cell, if any.
    pub fn focused(&self) -> Option<&CellRef> {
        self.focused.as_ref()
    }

    /// Write a field's text directly, without firing any handler.
    pub fn set_entry(&mut self, cell: &CellRef, text: &str) -> Result<()> {
        let input = self
            .input_mut(cell)
            .ok_or_else(|| GridpadError::InvalidCell(cell.to_string()))?;
        input.set_value(text);
        Ok(())
    }

    /// Type `text` into a cell and move focus away, as a user would.
    pub fn enter(&mut self, cell: &CellRef, text: &str) -> Result<()> {
        if !self.focus(cell) {
            return Err(GridpadError::InvalidCell(cell.to_string()));
        }
        self.set_entry(cell, text)?;
        self.blur();
        Ok(())
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSource for Sheet {
    fn cell_text(&self, cell: &CellRef) -> Option<&str> {
        self.display(cell)
    }
}
