use anyhow::{anyhow, Result};

use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    flow::{Intent, PermissionState},
    tui::{
        status::{read_status, write_status, SharedStatus},
        utils::bus::{Bus, UiToCore},
    },
};

pub fn handle_input(key: KeyEvent, status: &SharedStatus, bus: &Bus) -> Result<()> {
    let (permission, choice) = read_status(status, |s| {
        Ok((s.flow.permission(), s.temporarily.prompt_choice))
    })?;

    match permission {
        PermissionState::Unset => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                write_status(status, |s| {
                    s.temporarily.prompt_choice = s.temporarily.prompt_choice.toggled();
                    Ok(())
                })?;
                bus.ui_tx
                    .send(UiToCore::Refresh)
                    .map_err(|err| anyhow!(err))?;
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                bus.send_intent(Intent::CameraPermission(choice.granted()))
            }
            KeyCode::Char('y') | KeyCode::Char('a') => {
                bus.send_intent(Intent::CameraPermission(true))
            }
            KeyCode::Char('n') | KeyCode::Char('d') => {
                bus.send_intent(Intent::CameraPermission(false))
            }
            _ => Ok(()),
        },
        // Scanning runs on its own; only the global keys apply.
        PermissionState::Granted => Ok(()),
        PermissionState::Denied => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => bus.send_intent(Intent::Retry),
            _ => Ok(()),
        },
    }
}
