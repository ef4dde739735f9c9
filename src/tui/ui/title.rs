use ratatui::{prelude::*, widgets::*};

use crate::{
    flow::Screen,
    i18n::lang,
    tui::{status::Status, ui::components::spinner_frame},
};

pub fn render_title(f: &mut Frame, area: Rect, status: &Status) {
    // Horizontal layout: left (spinner) + center (title) + right (reserved)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(area);

    let bg_block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(Color::Gray));
    f.render_widget(bg_block, area);

    // Spin while a timed transition is pending
    if status.flow.pending().is_some() {
        let spin = Paragraph::new(format!(" {}", spinner_frame(status.temporarily.busy.spinner_frame)))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(spin, chunks[0]);
    }

    let title_para = Paragraph::new(title_text(status.flow.screen()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title_para, chunks[1]);
}

fn title_text(screen: Screen) -> String {
    let l = lang();
    match screen {
        Screen::Landing => l.title.clone(),
        Screen::Camera => format!("{} - {}", l.title, l.camera_title),
        Screen::Results => format!("{} - {}", l.title, l.results_title),
        Screen::Finish => format!("{} - {}", l.title, l.finish_title),
    }
}
