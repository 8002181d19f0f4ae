//! Startup settings for a sheet.

use gridpad_engine::engine::UnresolvedPolicy;

/// Number of columns and rows in a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Default for Dimensions {
    /// A through Z, rows 1 through 25.
    fn default() -> Self {
        Self {
            columns: 26,
            rows: 25,
        }
    }
}

/// Everything [`crate::startup_with`] needs to build a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub dimensions: Dimensions,
    pub unresolved: UnresolvedPolicy,
}
