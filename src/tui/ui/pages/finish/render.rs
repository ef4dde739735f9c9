use ratatui::{prelude::*, widgets::*};

use crate::{
    i18n::lang,
    tui::{
        status::Status,
        ui::components::{centered_rect, confidence_gauge::progress_line, ACCENT_GREEN, MUTED},
    },
};

pub fn page_bottom_hints(_status: &Status) -> Vec<String> {
    vec![lang().hint_wait.clone()]
}

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let l = lang();
    let dots = ".".repeat((status.temporarily.busy.spinner_frame as usize / 4) % 4);

    let panel = centered_rect(48, 9, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(panel);

    let lines = vec![
        Line::from(Span::styled(
            "✔",
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            l.finish_title.as_str(),
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(l.finish_thanks.as_str()),
        Line::default(),
        // Fixed width so the text does not jitter while the dots grow.
        Line::from(Span::styled(
            format!("{}{dots:<3}", l.finish_redirecting),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    if let Some(progress) = status.pending_progress() {
        frame.render_widget(progress_line(progress), rows[1]);
    }
}
