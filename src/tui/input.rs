use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use std::io;

use super::app::App;
use super::keys::{is_quit, translate};
use super::ui;

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let [_field_area, grid_area, _status_area] = ui::split_main_chunks(terminal_area);
    if let Some(cell) = ui::grid_cell_at(app, grid_area, mouse.column, mouse.row) {
        app.click(cell);
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_quit(key) {
                    return Ok(());
                }
                if let Some(key) = translate(key) {
                    app.dispatch(key);
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, area, mouse);
            }
            _ => {}
        }
    }
}
