use ratatui::{prelude::*, widgets::*};

use crate::{
    i18n::lang,
    tui::{
        status::Status,
        ui::components::{
            button::{button_span, ButtonState},
            confidence_gauge::confidence_gauge,
            render_boxed_paragraph, ACCENT_CYAN, ACCENT_GREEN, MUTED,
        },
    },
};

pub fn page_bottom_hints(_status: &Status) -> Vec<String> {
    vec![lang().hint_finish.clone()]
}

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let l = lang();
    let result = status.flow.result();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(result.instructions.len() as u16 + 2),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            l.results_title.as_str(),
            Style::default()
                .fg(ACCENT_CYAN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            l.results_subtitle.as_str(),
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let steps: Vec<Line> = result
        .instructions
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", idx + 1),
                    Style::default()
                        .fg(ACCENT_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(step.as_str()),
            ])
        })
        .collect();
    render_boxed_paragraph(
        frame,
        rows[1],
        steps,
        Some(l.results_instructions.as_str()),
        Some(ACCENT_CYAN),
        Alignment::Left,
    );

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_boxed_paragraph(
        frame,
        panels[0],
        vec![
            Line::from(Span::styled(
                result.category.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                l.results_category_note.as_str(),
                Style::default().fg(MUTED),
            )),
        ],
        Some(l.results_category.as_str()),
        Some(ACCENT_CYAN),
        Alignment::Left,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_CYAN))
        .title(format!(" {} ", l.results_confidence))
        .padding(Padding::horizontal(1));
    let inner = block.inner(panels[1]);
    frame.render_widget(block, panels[1]);
    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(confidence_gauge(result.confidence), gauge_rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            l.results_confidence_note.as_str(),
            Style::default().fg(MUTED),
        )),
        gauge_rows[1],
    );

    let finish = Paragraph::new(Line::from(button_span(
        &l.button_finish,
        ButtonState::Selected,
        ACCENT_GREEN,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(finish, rows[4]);
}
