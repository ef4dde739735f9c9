/// TUI status module
///
/// This module provides the TUI status tree and read/write helpers, along with
/// the serializable snapshot written for debugging and E2E tooling.
pub mod serializable;

use anyhow::Result;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use yuuka::derive_struct;

use crate::flow::FlowController;

pub use serializable::TuiStatus;

/// Which button of the camera permission card has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptChoice {
    Deny,
    #[default]
    Allow,
}

impl PromptChoice {
    pub fn toggled(self) -> Self {
        match self {
            PromptChoice::Deny => PromptChoice::Allow,
            PromptChoice::Allow => PromptChoice::Deny,
        }
    }

    pub fn granted(self) -> bool {
        matches!(self, PromptChoice::Allow)
    }
}

derive_struct! {
    pub Status {
        // Only the core task mutates the flow, through controller intents.
        flow: FlowController = FlowController::default(),

        temporarily: {
            // Focused button on the camera permission card
            prompt_choice: PromptChoice = PromptChoice::Allow,

            // When the currently pending transition was scheduled, for progress display
            timer_started?: std::time::Instant,

            // Busy indicator for the title spinner and page animations
            busy: {
                spinner_frame: u32 = 0,
            },

            // Last rejected intent or runtime failure, dismissed with `c`
            error?: ErrorInfo {
                message: String,
                timestamp: chrono::DateTime<chrono::Local>,
            },
        }
    }
}

pub use {ErrorInfo, Status};

pub type SharedStatus = Arc<RwLock<Status>>;

impl Status {
    pub fn with_flow(flow: FlowController) -> Self {
        Self {
            flow,
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.temporarily.error = Some(ErrorInfo {
            message: message.into(),
            timestamp: chrono::Local::now(),
        });
    }

    pub fn clear_error(&mut self) {
        self.temporarily.error = None;
    }

    /// Fraction of the pending transition's delay that has already elapsed.
    pub fn pending_progress(&self) -> Option<f64> {
        let pending = self.flow.pending()?;
        let started = self.temporarily.timer_started?;
        if pending.delay.is_zero() {
            return Some(1.0);
        }
        let ratio = started.elapsed().as_secs_f64() / pending.delay.as_secs_f64();
        Some(ratio.clamp(0.0, 1.0))
    }
}

pub fn new_shared(status: Status) -> SharedStatus {
    Arc::new(RwLock::new(status))
}

/// Read-only accessor for `Status`.
///
/// The closure may borrow from `Status`; the returned value is cloned before
/// the lock is released.
pub fn read_status<R, F>(status: &SharedStatus, f: F) -> Result<R>
where
    F: FnOnce(&Status) -> Result<R>,
    R: Clone,
{
    let guard = status.read();
    let val = f(&guard)?;
    Ok(val.clone())
}

/// Write accessor for `Status`. Use `Ok(())` if no value is needed.
pub fn write_status<R, F>(status: &SharedStatus, f: F) -> Result<R>
where
    F: FnOnce(&mut Status) -> Result<R>,
    R: Clone,
{
    let mut guard = status.write();
    let val = f(&mut guard)?;
    Ok(val.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{FlowTimings, Screen};

    #[test]
    fn default_status_starts_on_landing() {
        let status = Status::default();
        assert_eq!(status.flow.screen(), Screen::Landing);
        assert_eq!(status.temporarily.prompt_choice, PromptChoice::Allow);
        assert!(status.temporarily.error.is_none());
        assert!(status.pending_progress().is_none());
    }

    #[test]
    fn accessors_round_trip_through_lock() -> Result<()> {
        let shared = new_shared(Status::with_flow(FlowController::new(
            FlowTimings::from_millis(1, 2),
        )));
        write_status(&shared, |s| {
            s.set_error("boom");
            Ok(())
        })?;
        let message = read_status(&shared, |s| {
            Ok(s.temporarily.error.as_ref().map(|e| e.message.clone()))
        })?;
        assert_eq!(message.as_deref(), Some("boom"));

        write_status(&shared, |s| {
            s.clear_error();
            Ok(())
        })?;
        assert!(read_status(&shared, |s| Ok(s.temporarily.error.is_none()))?);
        Ok(())
    }

    #[test]
    fn prompt_choice_toggles() {
        assert_eq!(PromptChoice::Allow.toggled(), PromptChoice::Deny);
        assert_eq!(PromptChoice::Deny.toggled(), PromptChoice::Allow);
        assert!(PromptChoice::Allow.granted());
        assert!(!PromptChoice::Deny.granted());
    }

    #[test]
    fn progress_is_clamped() -> Result<()> {
        let mut status = Status::with_flow(FlowController::new(FlowTimings::from_millis(0, 0)));
        status.flow.start()?;
        status.flow.set_permission(true)?;
        status.temporarily.timer_started = Some(std::time::Instant::now());
        assert_eq!(status.pending_progress(), Some(1.0));
        Ok(())
    }
}
