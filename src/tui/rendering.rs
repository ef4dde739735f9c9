use anyhow::{anyhow, Result};
use std::{io, time::Duration};

use ratatui::{
    backend::{CrosstermBackend, TestBackend},
    prelude::*,
};

use crate::tui::{
    status::{SharedStatus, Status},
    ui::render_ui,
    utils::bus::{Bus, CoreToUi},
};

#[doc(hidden)]
pub fn render_ui_for_testing(frame: &mut Frame, status: &Status) {
    render_ui(frame, status)
}

/// Draw `status` into an off-screen buffer and return its text, one line per row.
pub fn render_to_text(status: &Status, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal
        .draw(|frame| render_ui(frame, status))
        .map_err(|err| anyhow!("Failed to draw: {err}"))?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area();
    let mut content = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            content.push_str(buffer[(x, y)].symbol());
        }
        content.push('\n');
    }
    Ok(content)
}

pub(crate) fn run_rendering_loop(
    status: SharedStatus,
    bus: Bus,
    thr_rx: flume::Receiver<Result<()>>,
) -> Result<()> {
    // Initialize terminal inside rendering thread to avoid cross-thread Terminal usage
    let mut stdout = io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = (|| {
        loop {
            if let Ok(res) = thr_rx.try_recv() {
                if let Err(err) = res {
                    log::error!("thread exited with error: {err:#}");
                    return Err(err);
                } else {
                    log::info!("a monitored thread exited cleanly; shutting down");
                    return Ok(());
                }
            }

            let should_quit = !matches!(
                bus.core_rx.recv_timeout(Duration::from_millis(100)),
                Ok(CoreToUi::Tick)
                    | Ok(CoreToUi::Refreshed)
                    | Ok(CoreToUi::Error)
                    | Err(flume::RecvTimeoutError::Timeout)
            );

            if should_quit {
                break;
            }

            // Clone under the read lock so drawing never blocks the core task.
            let snapshot = status.read().clone();
            terminal.draw(|frame| render_ui(frame, &snapshot))?;
        }

        terminal.clear()?;
        Ok(())
    })();

    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    result
}
