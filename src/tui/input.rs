use anyhow::{anyhow, Result};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    flow::{Intent, Screen},
    tui::{
        status::{read_status, write_status, SharedStatus},
        ui::pages,
        utils::bus::{Bus, UiToCore},
    },
};

/// Input thread: polls crossterm events until the core sends the kill signal.
pub fn run_input_thread(status: SharedStatus, bus: Bus, kill_rx: flume::Receiver<()>) -> Result<()> {
    log::info!("🎹 Input thread started");
    loop {
        if let Ok(true) = crossterm::event::poll(Duration::from_millis(100)) {
            if let Ok(event) = crossterm::event::read() {
                log::debug!("⌨️ Received event: {event:?}");
                handle_event(event, &status, &bus)?;
            }
        }

        if kill_rx.try_recv().is_ok() {
            break;
        }
    }

    Ok(())
}

pub fn handle_event(event: Event, status: &SharedStatus, bus: &Bus) -> Result<()> {
    if let Event::Key(key) = event {
        handle_key_event(key, status, bus)?;
    }
    Ok(())
}

fn handle_key_event(key: KeyEvent, status: &SharedStatus, bus: &Bus) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(()); // Ignore non-initial key press (repeat / release)
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => {
            bus.ui_tx.send(UiToCore::Quit).map_err(|err| anyhow!(err))?;
            return Ok(());
        }
        KeyCode::Char('c') => {
            write_status(status, |s| {
                s.clear_error();
                Ok(())
            })?;
            bus.ui_tx
                .send(UiToCore::Refresh)
                .map_err(|err| anyhow!(err))?;
            return Ok(());
        }
        KeyCode::Esc => {
            let screen = read_status(status, |s| Ok(s.flow.screen()))?;
            if screen != Screen::Landing {
                bus.send_intent(Intent::Abort)?;
            }
            return Ok(());
        }
        _ => {}
    }

    let screen = read_status(status, |s| Ok(s.flow.screen()))?;
    log::debug!("input: routing {:?} to the {screen} page", key.code);
    match screen {
        Screen::Landing => pages::landing::handle_input(key, status, bus),
        Screen::Camera => pages::camera::handle_input(key, status, bus),
        Screen::Results => pages::results::handle_input(key, status, bus),
        Screen::Finish => pages::finish::handle_input(key, status, bus),
    }
}
