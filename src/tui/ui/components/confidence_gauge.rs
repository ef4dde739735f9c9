use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Gauge, LineGauge},
};

use crate::flow::Confidence;

use super::ACCENT_GREEN;

/// Gauge for the results screen. `Confidence` never exceeds 100, so the
/// ratio handed to ratatui is always within `0.0..=1.0`.
pub fn confidence_gauge<'a>(confidence: Confidence) -> Gauge<'a> {
    Gauge::default()
        .gauge_style(Style::default().fg(ACCENT_GREEN).bg(Color::DarkGray))
        .ratio(confidence.ratio())
        .label(confidence.to_string())
        .use_unicode(true)
}

/// Thin progress line used while a timed transition is running.
pub fn progress_line<'a>(ratio: f64) -> LineGauge<'a> {
    LineGauge::default()
        .filled_style(
            Style::default()
                .fg(ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(ratio.clamp(0.0, 1.0))
}
