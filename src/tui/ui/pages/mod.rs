pub mod camera;
pub mod finish;
pub mod landing;
pub mod results;

use ratatui::prelude::*;

use crate::{flow::Screen, tui::status::Status};

/// Return page-provided bottom hints for the current screen.
pub fn bottom_hints_for_app(status: &Status) -> Vec<String> {
    match status.flow.screen() {
        Screen::Landing => landing::page_bottom_hints(status),
        Screen::Camera => camera::page_bottom_hints(status),
        Screen::Results => results::page_bottom_hints(status),
        Screen::Finish => finish::page_bottom_hints(status),
    }
}

/// Render the page for the current screen. Only reads from Status.
pub fn render_panels(f: &mut Frame, area: Rect, status: &Status) {
    match status.flow.screen() {
        Screen::Landing => landing::render(f, area, status),
        Screen::Camera => camera::render(f, area, status),
        Screen::Results => results::render(f, area, status),
        Screen::Finish => finish::render(f, area, status),
    }
}
