//! gridpad-core - UI-agnostic page, sheet and focus model.

pub mod error;
pub mod page;
pub mod settings;
pub mod sheet;

pub use error::{GridpadError, Result};
pub use page::{Container, DEFAULT_CONTAINER, Page, startup, startup_with};
pub use settings::{Dimensions, Settings};
pub use sheet::{HeaderCell, InputCell, Key, KeyOutcome, Sheet};

pub use gridpad_engine::engine::{CellRef, UnresolvedPolicy};
