use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    i18n::lang,
    tui::{
        status::Status,
        ui::{components::error_msg::render_error_line, pages},
    },
};

pub fn bottom_height(status: &Status) -> u16 {
    if status.temporarily.error.is_some() {
        2
    } else {
        1
    }
}

/// Hints for the current page followed by the global ones.
pub fn bottom_hints(status: &Status) -> Vec<String> {
    let l = lang();
    let mut hints = pages::bottom_hints_for_app(status);
    if status.temporarily.error.is_some() {
        hints.push(l.hint_clear_error.clone());
    }
    if status.flow.screen() != crate::flow::Screen::Landing {
        hints.push(l.hint_abort.clone());
    }
    hints.push(l.hint_quit.clone());
    hints
}

const HINT_SEPARATOR: &str = "   ";

/// Join as many leading hints as fit in `width` display columns.
pub fn fit_hints(hints: &[String], width: usize) -> String {
    let mut line = String::new();
    for hint in hints {
        let extra = if line.is_empty() {
            hint.width()
        } else {
            HINT_SEPARATOR.width() + hint.width()
        };
        if line.width() + extra > width {
            break;
        }
        if !line.is_empty() {
            line.push_str(HINT_SEPARATOR);
        }
        line.push_str(hint);
    }
    line
}

pub fn render_bottom(f: &mut Frame, area: Rect, status: &Status) {
    let hint_area = match &status.temporarily.error {
        Some(err) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .margin(0)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(area);
            render_error_line(f, rows[0], err);
            rows[1]
        }
        None => area,
    };

    let help_block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(Color::Gray).fg(Color::Black));
    let help = Paragraph::new(fit_hints(&bottom_hints(status), hint_area.width as usize))
        .alignment(Alignment::Center)
        .block(help_block);
    f.render_widget(help, hint_area);
}
