use ratatui::{prelude::*, widgets::*};

use crate::tui::status::ErrorInfo;

/// One-line red banner for the transient UI error.
pub fn render_error_line(f: &mut Frame, area: Rect, error: &ErrorInfo) {
    let text = format!(
        "[{}] {}",
        error.timestamp.format("%H:%M:%S"),
        error.message
    );
    let p = Paragraph::new(text).alignment(Alignment::Left).style(
        Style::default()
            .bg(Color::Red)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(p, area);
}
