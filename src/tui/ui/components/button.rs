use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Selected,
}

/// A bracketed label such as `[ Allow Camera ]`. The selected button is
/// drawn inverted in `accent` so it is visible without colour support too.
pub fn button_span<'a>(label: &str, state: ButtonState, accent: Color) -> Span<'a> {
    let text = format!("[ {label} ]");
    match state {
        ButtonState::Normal => Span::styled(text, Style::default().fg(accent)),
        ButtonState::Selected => Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_is_highlighted() {
        let normal = button_span("Deny", ButtonState::Normal, Color::Red);
        let selected = button_span("Deny", ButtonState::Selected, Color::Red);
        assert_eq!(normal.content, "[ Deny ]");
        assert_eq!(selected.content, normal.content);
        assert_eq!(selected.style.bg, Some(Color::Red));
        assert!(selected.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(normal.style.bg, None);
    }
}
