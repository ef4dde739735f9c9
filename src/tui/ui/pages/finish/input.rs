use anyhow::Result;

use crossterm::event::KeyEvent;

use crate::tui::{status::SharedStatus, utils::bus::Bus};

/// The finish screen returns to the landing screen on its own; Esc (handled
/// globally) skips the wait.
pub fn handle_input(_key: KeyEvent, _status: &SharedStatus, _bus: &Bus) -> Result<()> {
    Ok(())
}
