pub(crate) mod bottom;
pub mod components;
pub mod pages;
pub(crate) mod title;

use ratatui::prelude::*;

use crate::tui::status::Status;

/// Draw the whole screen from a status snapshot. Reads only, never mutates.
pub fn render_ui(f: &mut Frame, status: &Status) {
    let area = f.area();
    let bottom_len = bottom::bottom_height(status);
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),
            Constraint::Length(bottom_len), // Hints, plus the error line when present
        ])
        .split(area);

    title::render_title(f, main_chunks[0], status);
    pages::render_panels(f, main_chunks[1], status);
    bottom::render_bottom(f, main_chunks[2], status);
}
