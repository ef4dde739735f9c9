use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// Render lines inside a bordered block.
///
/// Parameters:
/// - `title`: optional block title, rendered with one space of padding on each side
/// - `border`: border colour; `None` keeps the terminal default
/// - `alignment`: horizontal alignment of the content
pub fn render_boxed_paragraph(
    frame: &mut Frame,
    area: Rect,
    content: Vec<Line>,
    title: Option<&str>,
    border: Option<Color>,
    alignment: Alignment,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));
    if let Some(title_text) = title {
        block = block.title(format!(" {title_text} "));
    }
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }

    let para = Paragraph::new(content)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
