//! UI rendering

use super::app::App;
use gridpad_core::{CellRef, HeaderCell, InputCell, Sheet};
use gridpad_engine::engine::Entry;
use gridpad_engine::is_error_marker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub(crate) const FIELD_BAR_HEIGHT: u16 = 3;
pub(crate) const GRID_MIN_HEIGHT: u16 = 5;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const ROW_HEADER_WIDTH: u16 = 4;
pub(crate) const GRID_COLUMN_SPACING: u16 = 1;

const CARET: char = '│';

pub(crate) fn split_main_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_BAR_HEIGHT),
            Constraint::Min(GRID_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// The data cell under a mouse position inside the grid block, if any.
pub(crate) fn grid_cell_at(
    app: &App,
    grid_area: Rect,
    mouse_col: u16,
    mouse_row: u16,
) -> Option<CellRef> {
    let sheet = app.sheet()?;
    let dims = sheet.dimensions();

    // Skip the border, then the header row.
    let inner_x = grid_area.x.saturating_add(1);
    let first_data_row = grid_area.y.saturating_add(2);
    let inner_right = grid_area.x.saturating_add(grid_area.width.saturating_sub(1));
    let inner_bottom = grid_area.y.saturating_add(grid_area.height.saturating_sub(1));
    if mouse_row < first_data_row || mouse_row >= inner_bottom || mouse_col >= inner_right {
        return None;
    }

    let rel_row = (mouse_row - first_data_row) as usize;
    if rel_row >= app.visible_rows {
        return None;
    }
    let row = app.viewport_row + rel_row;

    let cells_x = inner_x
        .saturating_add(ROW_HEADER_WIDTH)
        .saturating_add(GRID_COLUMN_SPACING);
    if mouse_col < cells_x {
        return None;
    }
    let stride = app.col_width + GRID_COLUMN_SPACING;
    let offset = mouse_col - cells_x;
    if offset % stride >= app.col_width {
        // Between columns.
        return None;
    }
    let rel_col = (offset / stride) as usize;
    if rel_col >= app.visible_cols {
        return None;
    }
    let col = app.viewport_col + rel_col;

    (col < dims.columns && row < dims.rows).then(|| CellRef::new(col, row))
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = split_main_chunks(f.area());

    // Update visible dimensions based on actual size
    let grid_area = chunks[1];
    let available_width = grid_area
        .width
        .saturating_sub(ROW_HEADER_WIDTH + GRID_COLUMN_SPACING + 2) as usize;
    let available_height = grid_area.height.saturating_sub(3) as usize; // header + borders
    let stride = (app.col_width + GRID_COLUMN_SPACING) as usize;

    app.visible_cols = (available_width / stride).max(1);
    app.visible_rows = available_height.max(1);
    app.update_viewport();

    let Some(sheet) = app.sheet() else {
        f.render_widget(Paragraph::new("No sheet rendered"), f.area());
        return;
    };

    draw_field_bar(f, sheet, chunks[0]);
    draw_grid(f, app, sheet, chunks[1]);
    draw_status_bar(f, app, sheet, chunks[2]);
}

fn with_caret(input: &InputCell) -> String {
    let (before, after) = input.value().split_at(input.caret());
    format!("{}{}{}", before, CARET, after)
}

fn draw_field_bar(f: &mut Frame, sheet: &Sheet, area: Rect) {
    let (title, content) = match sheet.focused().and_then(|c| sheet.input(c)) {
        Some(input) => (format!(" {} ", input.id()), with_caret(input)),
        None => (" No cell focused ".to_string(), String::new()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(if sheet.focused().is_some() {
            Color::Yellow
        } else {
            Color::White
        }));

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn header_style(header: &HeaderCell) -> Style {
    if header.is_selected() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Numbers sit on the right of their column, everything else on the left.
fn cell_alignment(input: &InputCell) -> Alignment {
    match Entry::classify(input.value()) {
        Entry::Literal(_) => Alignment::Right,
        _ => Alignment::Left,
    }
}

fn draw_grid(f: &mut Frame, app: &App, sheet: &Sheet, area: Rect) {
    let dims = sheet.dimensions();
    let cols = app.viewport_col..(app.viewport_col + app.visible_cols).min(dims.columns);
    let rows = app.viewport_row..(app.viewport_row + app.visible_rows).min(dims.rows);

    // Build header row
    let mut header_cells = vec![Cell::from(sheet.corner().text().to_string())];
    for col in cols.clone() {
        if let Some(header) = sheet.column_header(col) {
            header_cells.push(Cell::from(header.text().to_string()).style(header_style(header)));
        }
    }
    let header = Row::new(header_cells).height(1);

    // Build data rows
    let focused = sheet.focused().copied();
    let mut table_rows = Vec::new();
    for row in rows {
        let mut cells = Vec::new();
        if let Some(header) = sheet.row_header(row) {
            cells.push(Cell::from(header.text().to_string()).style(header_style(header)));
        }

        for col in cols.clone() {
            let cell_ref = CellRef::new(col, row);
            let Some(input) = sheet.input(&cell_ref) else {
                continue;
            };

            let (text, style) = if focused == Some(cell_ref) {
                (
                    with_caret(input),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_error_marker(input.value()) {
                (input.value().to_string(), Style::default().fg(Color::Red))
            } else if input.formula().is_some() {
                (input.value().to_string(), Style::default().fg(Color::Green))
            } else {
                (input.value().to_string(), Style::default())
            };

            cells.push(Cell::from(Line::from(text).alignment(cell_alignment(input))).style(style));
        }

        table_rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH)];
    widths.extend(cols.map(|_| Constraint::Length(app.col_width)));

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Gridpad "))
        .column_spacing(GRID_COLUMN_SPACING);

    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, sheet: &Sheet, area: Rect) {
    let formula = sheet
        .focused()
        .and_then(|c| sheet.stored_formula(c))
        .map(|formula| format!("formula {}  |  ", formula))
        .unwrap_or_default();
    let status = format!("{}{}", formula, app.status_hint());

    let spans = vec![Span::styled(status, Style::default().fg(Color::DarkGray))];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
