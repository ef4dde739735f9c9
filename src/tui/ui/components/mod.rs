pub mod boxed_paragraph;
pub mod button;
pub mod confidence_gauge;
pub mod error_msg;

pub use boxed_paragraph::render_boxed_paragraph;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

/// Cyan accent used for titles and scanning effects.
pub const ACCENT_CYAN: Color = Color::Rgb(0x5A, 0xF3, 0xF2);
/// Green accent used for success states and gauges.
pub const ACCENT_GREEN: Color = Color::Rgb(0x54, 0xFB, 0x82);
pub const MUTED: Color = Color::Gray;
pub const DANGER: Color = Color::LightRed;

/// Spinner frames shared by the title bar and busy indicators.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(frame: u32) -> &'static str {
    SPINNER_FRAMES[(frame as usize) % SPINNER_FRAMES.len()]
}

/// Carve a `width` x `height` rectangle out of the middle of `area`,
/// shrinking to fit when `area` is smaller.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = centered_rect(40, 10, area);
        assert_eq!((inner.width, inner.height), (40, 10));
        assert_eq!((inner.x, inner.y), (20, 7));

        let clipped = centered_rect(200, 50, area);
        assert_eq!(clipped, area);
    }

    #[test]
    fn spinner_wraps_around() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len() as u32));
    }
}
