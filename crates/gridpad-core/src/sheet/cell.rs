//! Header and input cells.

use gridpad_engine::engine::CellRef;

/// A header cell (corner, column letter or row number).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub(crate) id: String,
    pub(crate) text: String,
    pub(crate) selected: bool,
}

impl HeaderCell {
    pub(crate) fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            selected: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while a cell in this header's row or column has focus.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// An editable text field in the grid.
///
/// Holds the displayed entry text, the caret (a byte offset on a char
/// boundary) and the stored formula, if the last commit was a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputCell {
    pub(crate) cell_ref: CellRef,
    pub(crate) value: String,
    pub(crate) caret: usize,
    pub(crate) formula: Option<String>,
}

impl InputCell {
    pub(crate) fn new(cell_ref: CellRef) -> Self {
        Self {
            cell_ref,
            value: String::new(),
            caret: 0,
            formula: None,
        }
    }

    pub fn cell_ref(&self) -> CellRef {
        self.cell_ref
    }

    /// The element identifier, e.g. "B12".
    pub fn id(&self) -> String {
        self.cell_ref.to_string()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    /// Replace the field text and put the caret at the end.
    pub(crate) fn set_value(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.caret = self.value.len();
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.value.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    pub(crate) fn backspace(&mut self) {
        if self.caret > 0 {
            let start = self.prev_boundary();
            self.value.drain(start..self.caret);
            self.caret = start;
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.caret < self.value.len() {
            let end = self.next_boundary();
            self.value.drain(self.caret..end);
        }
    }

    pub(crate) fn caret_home(&mut self) {
        self.caret = 0;
    }

    pub(crate) fn caret_end(&mut self) {
        self.caret = self.value.len();
    }

    fn prev_boundary(&self) -> usize {
        let mut pos = self.caret - 1;
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_boundary(&self) -> usize {
        let mut pos = self.caret + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}
