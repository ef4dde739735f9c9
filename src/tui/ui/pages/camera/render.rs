use ratatui::{prelude::*, widgets::*};

use crate::{
    flow::PermissionState,
    i18n::lang,
    tui::{
        status::{PromptChoice, Status},
        ui::components::{
            button::{button_span, ButtonState},
            centered_rect,
            confidence_gauge::progress_line,
            render_boxed_paragraph, spinner_frame, ACCENT_CYAN, ACCENT_GREEN, DANGER,
        },
    },
};

pub fn page_bottom_hints(status: &Status) -> Vec<String> {
    let l = lang();
    match status.flow.permission() {
        PermissionState::Unset => vec![
            l.hint_choose.clone(),
            l.hint_confirm.clone(),
            l.hint_allow_deny.clone(),
        ],
        PermissionState::Granted => vec![l.hint_wait.clone()],
        PermissionState::Denied => vec![l.hint_retry.clone()],
    }
}

pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Span::styled(
        lang().camera_title.as_str(),
        Style::default()
            .fg(ACCENT_CYAN)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    match status.flow.permission() {
        PermissionState::Unset => render_prompt(frame, chunks[1], status.temporarily.prompt_choice),
        PermissionState::Granted => render_scanning(frame, chunks[1], status),
        PermissionState::Denied => render_denied(frame, chunks[1]),
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, choice: PromptChoice) {
    let l = lang();
    let (deny, allow) = match choice {
        PromptChoice::Deny => (ButtonState::Selected, ButtonState::Normal),
        PromptChoice::Allow => (ButtonState::Normal, ButtonState::Selected),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("📷 {}", l.camera_permission_title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(l.camera_permission_body.as_str()),
        Line::default(),
        Line::from(vec![
            button_span(&l.button_deny, deny, DANGER),
            Span::raw("    "),
            button_span(&l.button_allow, allow, ACCENT_GREEN),
        ]),
    ];
    render_boxed_paragraph(
        frame,
        centered_rect(60, 10, area),
        lines,
        None,
        Some(ACCENT_CYAN),
        Alignment::Center,
    );
}

fn render_scanning(frame: &mut Frame, area: Rect, status: &Status) {
    let l = lang();
    let panel = centered_rect(60, 14, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(panel);

    // Simulated camera feed: a scan line sweeping down the preview box
    let preview = rows[0];
    let inner_height = preview.height.saturating_sub(2).max(1) as usize;
    let sweep = status.temporarily.busy.spinner_frame as usize % inner_height;
    let width = preview.width.saturating_sub(4) as usize;
    let feed: Vec<Line> = (0..inner_height)
        .map(|row| {
            if row == sweep {
                Line::from(Span::styled(
                    "━".repeat(width),
                    Style::default().fg(ACCENT_CYAN),
                ))
            } else {
                Line::default()
            }
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(ACCENT_GREEN))
        .title(format!(" {} ", l.camera_preview))
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(feed).block(block), preview);

    let processing = Paragraph::new(Line::from(vec![
        Span::styled(
            spinner_frame(status.temporarily.busy.spinner_frame),
            Style::default().fg(ACCENT_GREEN),
        ),
        Span::raw(" "),
        Span::styled(
            l.camera_processing.as_str(),
            Style::default().fg(ACCENT_GREEN),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(processing, rows[1]);

    let progress = status.pending_progress().unwrap_or(0.0);
    frame.render_widget(progress_line(progress), rows[2]);
}

fn render_denied(frame: &mut Frame, area: Rect) {
    let l = lang();
    let lines = vec![
        Line::from(Span::styled(
            format!("✖ {}", l.camera_denied_title),
            Style::default().fg(DANGER).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(l.camera_denied_body.as_str()),
        Line::default(),
        Line::from(button_span(&l.button_try_again, ButtonState::Selected, ACCENT_CYAN)),
    ];
    render_boxed_paragraph(
        frame,
        centered_rect(60, 9, area),
        lines,
        None,
        Some(DANGER),
        Alignment::Center,
    );
}
