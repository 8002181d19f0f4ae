//! Grid construction: header row, row headers and input cells.

use gridpad_engine::engine::{CellRef, UnresolvedPolicy};
use log::debug;

use super::Sheet;
use super::cell::{HeaderCell, InputCell};
use crate::settings::Dimensions;

pub(crate) const HEADER_ROW_ID: &str = "headerRow";
pub(crate) const CORNER_ID: &str = "blankCell";

/// Build a blank sheet. Cells are stored row-major, in document order.
pub(crate) fn build(dimensions: Dimensions, unresolved: UnresolvedPolicy) -> Sheet {
    let column_headers = (0..dimensions.columns)
        .map(|col| {
            let letters = CellRef::col_to_letters(col);
            HeaderCell::new(letters.clone(), letters)
        })
        .collect();

    let row_headers = (1..=dimensions.rows)
        .map(|row| HeaderCell::new(row.to_string(), row.to_string()))
        .collect();

    let mut cells = Vec::with_capacity(dimensions.columns * dimensions.rows);
    for row in 0..dimensions.rows {
        for col in 0..dimensions.columns {
            cells.push(InputCell::new(CellRef::new(col, row)));
        }
    }

    debug!(
        "built {}x{} grid ({} inputs)",
        dimensions.columns,
        dimensions.rows,
        cells.len()
    );

    Sheet {
        dimensions,
        unresolved,
        corner: HeaderCell::new(CORNER_ID, ""),
        column_headers,
        row_headers,
        cells,
        focused: None,
    }
}
