//! Non-interactive mode: apply entries, then print cell values.

use gridpad_core::{CellRef, Sheet};
use gridpad_engine::is_error_marker;
use std::io::{self, Write};

use crate::error::ArgError;

/// One `CELL=TEXT` entry from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub cell: CellRef,
    pub text: String,
}

impl Assignment {
    /// Parse `CELL=TEXT`. Only the first `=` separates, so `B1==A1+5`
    /// enters the formula `=A1+5`.
    pub fn parse(arg: &str) -> Result<Assignment, ArgError> {
        let (cell, text) = arg
            .split_once('=')
            .ok_or_else(|| ArgError::InvalidAssignment(arg.to_string()))?;
        let cell = parse_cell(cell)?;
        Ok(Assignment {
            cell,
            text: text.to_string(),
        })
    }
}

pub fn parse_cell(id: &str) -> Result<CellRef, ArgError> {
    CellRef::from_str(id.trim()).ok_or_else(|| ArgError::InvalidCell(id.to_string()))
}

/// Commit each entry in order, exactly as typing it and leaving the cell would.
pub fn apply_assignments(sheet: &mut Sheet, assignments: &[Assignment]) -> anyhow::Result<()> {
    for assignment in assignments {
        sheet.enter(&assignment.cell, &assignment.text)?;
    }
    Ok(())
}

/// Print the requested cells (one value per line), then optionally every
/// non-blank cell as `ID<TAB>VALUE`.
///
/// Returns true if any printed value is an error marker.
pub fn print_cells<W: Write>(
    sheet: &Sheet,
    cells: &[CellRef],
    dump: bool,
    out: &mut W,
) -> io::Result<bool> {
    let mut saw_error = false;
    for cell in cells {
        let value = sheet.display(cell).unwrap_or("#REF!");
        saw_error |= is_error_marker(value) || !sheet.contains(cell);
        writeln!(out, "{}", value)?;
    }
    if dump {
        for input in sheet.inputs().filter(|i| !i.value().is_empty()) {
            saw_error |= is_error_marker(input.value());
            writeln!(out, "{}\t{}", input.id(), input.value())?;
        }
    }
    Ok(saw_error)
}
