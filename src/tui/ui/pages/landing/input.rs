use anyhow::Result;

use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    flow::Intent,
    tui::{status::SharedStatus, utils::bus::Bus},
};

pub fn handle_input(key: KeyEvent, _status: &SharedStatus, bus: &Bus) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => bus.send_intent(Intent::Start),
        _ => Ok(()),
    }
}
