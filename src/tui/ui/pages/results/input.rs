use anyhow::Result;

use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    flow::Intent,
    tui::{status::SharedStatus, utils::bus::Bus},
};

pub fn handle_input(key: KeyEvent, _status: &SharedStatus, bus: &Bus) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') => bus.send_intent(Intent::Finish),
        _ => Ok(()),
    }
}
