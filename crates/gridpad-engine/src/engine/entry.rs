//! Classification of the raw text held by a cell's field.

use super::format::parse_number;

/// Shortest entry (in characters) that counts as a formula.
pub const MIN_FORMULA_LEN: usize = 5;

/// What a cell entry holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry<'a> {
    /// Nothing but whitespace.
    Blank,
    /// Text that reads as a number.
    Literal(f64),
    /// `=` followed by a body; carries the body without the `=`.
    Formula(&'a str),
    /// Anything else, including `=` entries too short to be formulas.
    Text,
}

impl<'a> Entry<'a> {
    /// Classify raw entry text.
    ///
    /// A formula is any text starting with `=` that is at least
    /// [`MIN_FORMULA_LEN`] characters long. Shorter `=` entries such as
    /// `=1+2` stay as plain text.
    pub fn classify(text: &'a str) -> Entry<'a> {
        if is_formula(text) {
            return Entry::Formula(&text[1..]);
        }
        if text.trim().is_empty() {
            return Entry::Blank;
        }
        match parse_number(text) {
            Some(n) => Entry::Literal(n),
            None => Entry::Text,
        }
    }
}

/// Whether `text` qualifies as a formula.
pub fn is_formula(text: &str) -> bool {
    text.starts_with('=') && text.chars().count() >= MIN_FORMULA_LEN
}
