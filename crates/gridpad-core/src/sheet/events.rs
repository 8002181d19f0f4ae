//! Focus and keyboard handling.
//!
//! Four handlers are registered against every input, mirroring a browser's
//! event model: focus, blur, key-down and key-press. [`Sheet::dispatch_key`]
//! runs key-down, then key-press (Enter and printable characters only), then
//! the field's default action, stopping as soon as a handler suppresses the
//! default.

use gridpad_engine::engine::CellRef;
use log::debug;

use super::Sheet;

/// A key as delivered to the focused field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Home,
    End,
    Char(char),
}

impl Key {
    /// Keys that fire a key-press after key-down.
    fn produces_keypress(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(_))
    }
}

/// Result of dispatching a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub default_prevented: bool,
}

struct KeyEvent {
    key: Key,
    target: CellRef,
    default_prevented: bool,
}

impl KeyEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

impl Sheet {
    /// Move focus to `cell`, blurring the previously focused cell first.
    ///
    /// Returns false (and changes nothing) when `cell` is outside the grid.
    pub fn focus(&mut self, cell: &CellRef) -> bool {
        if !self.contains(cell) {
            return false;
        }
        if self.focused.as_ref() == Some(cell) {
            return true;
        }
        if let Some(previous) = self.focused.take() {
            self.on_blur(&previous);
        }
        self.focused = Some(*cell);
        self.on_focus(cell);
        true
    }

    /// Remove focus from the focused cell, if any.
    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            self.on_blur(&previous);
        }
    }

    /// Deliver a key to the focused cell.
    pub fn dispatch_key(&mut self, key: Key) -> KeyOutcome {
        let Some(target) = self.focused else {
            self.document_default_action(key);
            return KeyOutcome::default();
        };

        let mut event = KeyEvent {
            key,
            target,
            default_prevented: false,
        };

        self.on_key_down(&mut event);
        if !event.default_prevented && key.produces_keypress() && self.focused == Some(target) {
            self.on_key_press(&mut event);
        }
        if !event.default_prevented && self.focused == Some(target) {
            self.default_action(&target, key);
        }

        KeyOutcome {
            default_prevented: event.default_prevented,
        }
    }

    fn on_focus(&mut self, cell: &CellRef) {
        self.set_headers_selected(cell, true);
        if let Some(input) = self.input_mut(cell) {
            if let Some(formula) = input.formula.clone() {
                if formula.chars().count() > 1 {
                    input.set_value(formula);
                }
            }
            input.caret_end();
        }
        debug!("focus {}", cell);
    }

    fn on_blur(&mut self, cell: &CellRef) {
        self.set_headers_selected(cell, false);
        self.process_cell(cell);
        debug!("blur {}", cell);
    }

    fn on_key_down(&mut self, event: &mut KeyEvent) {
        match event.key {
            Key::Escape => {
                if let Some(input) = self.input_mut(&event.target) {
                    input.set_value("");
                }
                self.blur();
            }
            Key::Up => {
                self.move_focus_from(&event.target, 0, -1);
                event.prevent_default();
            }
            Key::Down => {
                self.move_focus_from(&event.target, 0, 1);
                event.prevent_default();
            }
            Key::Left => {
                self.move_focus_from(&event.target, -1, 0);
                event.prevent_default();
            }
            Key::Right => {
                self.move_focus_from(&event.target, 1, 0);
                event.prevent_default();
            }
            _ => {}
        }
    }

    fn on_key_press(&mut self, event: &mut KeyEvent) {
        if event.key == Key::Enter {
            self.blur();
            self.move_focus_from(&event.target, 0, 1);
            event.prevent_default();
        }
    }

    /// Focus the neighbour of `cell`; silently does nothing off the grid.
    fn move_focus_from(&mut self, cell: &CellRef, dcol: isize, drow: isize) {
        if let Some(next) = cell.offset(dcol, drow) {
            self.focus(&next);
        }
    }

    /// What the field does with a key nobody suppressed.
    fn default_action(&mut self, cell: &CellRef, key: Key) {
        match key {
            Key::Tab => self.focus_in_document_order(Some(cell), true),
            Key::BackTab => self.focus_in_document_order(Some(cell), false),
            _ => {
                let Some(input) = self.input_mut(cell) else {
                    return;
                };
                match key {
                    Key::Char(c) => input.insert_char(c),
                    Key::Backspace => input.backspace(),
                    Key::Delete => input.delete(),
                    Key::Home => input.caret_home(),
                    Key::End => input.caret_end(),
                    _ => {}
                }
            }
        }
    }

    /// Keys with no focused field only drive tab traversal.
    fn document_default_action(&mut self, key: Key) {
        match key {
            Key::Tab => self.focus_in_document_order(None, true),
            Key::BackTab => self.focus_in_document_order(None, false),
            _ => {}
        }
    }

    /// Tab traversal over inputs in row-major order. Tabbing past either end
    /// leaves the grid with nothing focused.
    fn focus_in_document_order(&mut self, from: Option<&CellRef>, forward: bool) {
        let columns = self.dimensions.columns;
        let count = self.cells.len();
        if count == 0 {
            return;
        }
        let next = match (from, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(cell), true) => Some(cell.row * columns + cell.col + 1).filter(|&i| i < count),
            (Some(cell), false) => (cell.row * columns + cell.col).checked_sub(1),
        };
        match next {
            Some(index) => {
                let cell = CellRef::new(index % columns, index / columns);
                self.focus(&cell);
            }
            None => self.blur(),
        }
    }

    fn set_headers_selected(&mut self, cell: &CellRef, selected: bool) {
        if let Some(header) = self.column_headers.get_mut(cell.col) {
            header.selected = selected;
        }
        if let Some(header) = self.row_headers.get_mut(cell.row) {
            header.selected = selected;
        }
    }
}
