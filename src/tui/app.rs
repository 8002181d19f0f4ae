//! Application state for the terminal front-end.
//!
//! [`App`] owns the page and the viewport. It never tracks an active cell
//! of its own: the sheet's focus is the only cursor there is.

use gridpad_core::{CellRef, DEFAULT_CONTAINER, Key, Page, Sheet};
use log::debug;

/// Terminal UI state.
pub struct App {
    /// The page holding the rendered sheet
    pub page: Page,
    /// Viewport offset (column)
    pub viewport_col: usize,
    /// Viewport offset (row)
    pub viewport_row: usize,
    /// Number of visible columns
    pub visible_cols: usize,
    /// Number of visible rows
    pub visible_rows: usize,
    /// Column width for display
    pub col_width: u16,
}

impl App {
    pub fn new(page: Page, col_width: u16) -> Self {
        App {
            page,
            viewport_col: 0,
            viewport_row: 0,
            visible_cols: 8,
            visible_rows: 20,
            col_width,
        }
    }

    pub fn sheet(&self) -> Option<&Sheet> {
        self.page.sheet(DEFAULT_CONTAINER)
    }

    fn sheet_mut(&mut self) -> Option<&mut Sheet> {
        self.page.sheet_mut(DEFAULT_CONTAINER)
    }

    pub fn focused(&self) -> Option<CellRef> {
        self.sheet().and_then(|s| s.focused().copied())
    }

    /// Deliver a key to the sheet and keep the focused cell in view.
    pub fn dispatch(&mut self, key: Key) {
        if let Some(sheet) = self.sheet_mut() {
            let outcome = sheet.dispatch_key(key);
            debug!("{:?} -> {:?}", key, outcome);
        }
        self.update_viewport();
    }

    /// Focus a cell, as a mouse click on it would.
    pub fn click(&mut self, cell: CellRef) {
        if let Some(sheet) = self.sheet_mut() {
            sheet.focus(&cell);
        }
        self.update_viewport();
    }

    /// Scroll so the focused cell is visible.
    pub fn update_viewport(&mut self) {
        let Some(cell) = self.focused() else {
            return;
        };

        if cell.col < self.viewport_col {
            self.viewport_col = cell.col;
        } else if cell.col >= self.viewport_col + self.visible_cols {
            self.viewport_col = cell.col + 1 - self.visible_cols;
        }

        if cell.row < self.viewport_row {
            self.viewport_row = cell.row;
        } else if cell.row >= self.viewport_row + self.visible_rows {
            self.viewport_row = cell.row + 1 - self.visible_rows;
        }
    }

    pub fn status_hint(&self) -> &'static str {
        if self.focused().is_some() {
            "arrows:move  Enter:commit+down  Esc:clear  Tab:next  C-q:quit"
        } else {
            "Tab or click:focus a cell  C-q:quit"
        }
    }
}
