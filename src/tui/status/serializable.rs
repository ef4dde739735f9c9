//! Serializable snapshot of the TUI status.
//!
//! Written as JSON when `--status-dump` is set so scripted tests and humans
//! can follow the flow without scraping the terminal.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::flow::{PermissionState, ScanResult, Screen, TimerKind, TimerToken};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuiStatus {
    pub screen: Screen,
    pub permission: PermissionState,
    /// Only present while the results screen is showing.
    #[serde(default)]
    pub result: Option<ScanResult>,
    #[serde(default)]
    pub pending_timer: Option<PendingTimer>,
    #[serde(default)]
    pub error: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub delay_ms: u64,
}

impl TuiStatus {
    pub fn from_status(status: &super::Status) -> Self {
        let flow = &status.flow;
        let result = match flow.screen() {
            Screen::Results => Some(flow.result().clone()),
            _ => None,
        };
        let pending_timer = flow.pending().map(|pending| PendingTimer {
            token: pending.token,
            kind: pending.kind,
            delay_ms: pending.delay.as_millis() as u64,
        });

        TuiStatus {
            screen: flow.screen(),
            permission: flow.permission(),
            result,
            pending_timer,
            error: status
                .temporarily
                .error
                .as_ref()
                .map(|err| err.message.clone()),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize TUI status")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write status dump to {}", path.display()))
    }
}
