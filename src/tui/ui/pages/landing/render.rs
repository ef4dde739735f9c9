use ratatui::{prelude::*, widgets::*};

use crate::{
    i18n::lang,
    tui::{
        status::Status,
        ui::components::{centered_rect, ACCENT_CYAN, ACCENT_GREEN, MUTED},
    },
};

/// Frames of the pulsing sorting icon in the middle of the landing screen.
const CORE_FRAMES: [&str; 4] = ["(  ♻  )", "(( ♻ ))", "((( ♻ )))", "(( ♻ ))"];

pub fn page_bottom_hints(_status: &Status) -> Vec<String> {
    vec![lang().hint_start.clone()]
}

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let l = lang();
    let pulse = CORE_FRAMES[(status.temporarily.busy.spinner_frame as usize / 3) % CORE_FRAMES.len()];

    let lines = vec![
        Line::from(Span::styled(
            l.title.as_str(),
            Style::default()
                .fg(ACCENT_CYAN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(l.subtitle.as_str(), Style::default().fg(MUTED))),
        Line::default(),
        Line::from(Span::styled(
            pulse,
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            l.landing_prompt.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            l.landing_footer.as_str(),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_CYAN));
    let inner = centered_rect(64, lines.len() as u16 + 2, area);
    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}
