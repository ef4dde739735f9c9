use anyhow::{bail, Result};

use super::types::{
    Effect, FlowTimings, Intent, PendingTransition, PermissionState, ScanResult, Screen,
    TimerKind, TimerToken,
};

/// Page flow state machine.
///
/// The controller only records what should happen after a delay and hands
/// the corresponding [`Effect`]s back to the caller, which owns the actual
/// timers (see [`crate::flow::scheduler::Scheduler`]). A timer that fires
/// after the flow has moved on carries a stale token and is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowController {
    screen: Screen,
    permission: PermissionState,
    result: ScanResult,
    pending: Option<PendingTransition>,
    next_token: u64,
    timings: FlowTimings,
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}

impl FlowController {
    pub fn new(timings: FlowTimings) -> Self {
        Self {
            screen: Screen::Landing,
            permission: PermissionState::Unset,
            result: ScanResult::fixture(),
            pending: None,
            next_token: 0,
            timings,
        }
    }

    /// Replace the payload shown on the results screen.
    pub fn with_result(mut self, result: ScanResult) -> Self {
        self.result = result;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    pub fn result(&self) -> &ScanResult {
        &self.result
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn timings(&self) -> FlowTimings {
        self.timings
    }

    /// Dispatch a screen intent to the matching operation.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<Effect>> {
        match intent {
            Intent::Start => self.start(),
            Intent::CameraPermission(granted) => self.set_permission(granted),
            Intent::Retry => self.retry(),
            Intent::Finish => self.finish(),
            Intent::Abort => Ok(self.abort()),
        }
    }

    pub fn start(&mut self) -> Result<Vec<Effect>> {
        self.expect_screen("start", Screen::Landing)?;
        self.screen = Screen::Camera;
        self.permission = PermissionState::Unset;
        Ok(Vec::new())
    }

    pub fn set_permission(&mut self, granted: bool) -> Result<Vec<Effect>> {
        self.expect_screen("set_permission", Screen::Camera)?;
        if self.permission != PermissionState::Unset {
            bail!(
                "set_permission is only valid while the permission prompt is showing (permission is {})",
                self.permission
            );
        }

        self.permission = PermissionState::from_choice(granted);
        if granted {
            Ok(self.schedule(TimerKind::ScanComplete))
        } else {
            Ok(Vec::new())
        }
    }

    pub fn retry(&mut self) -> Result<Vec<Effect>> {
        self.expect_screen("retry", Screen::Camera)?;
        if self.permission != PermissionState::Denied {
            bail!(
                "retry is only valid after the camera permission was denied (permission is {})",
                self.permission
            );
        }
        self.permission = PermissionState::Unset;
        Ok(Vec::new())
    }

    pub fn finish(&mut self) -> Result<Vec<Effect>> {
        self.expect_screen("finish", Screen::Results)?;
        self.screen = Screen::Finish;
        Ok(self.schedule(TimerKind::ReturnToLanding))
    }

    /// Return to the landing screen from anywhere, dropping any pending transition.
    pub fn abort(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        self.reset_cycle();
        effects
    }

    /// Apply the transition scheduled under `token`.
    ///
    /// Returns `false` when the token no longer matches the pending transition.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> bool {
        let Some(pending) = self.pending else {
            log::debug!("timer {token} elapsed with nothing pending; ignored");
            return false;
        };
        if pending.token != token {
            log::debug!(
                "timer {token} is stale (pending is {} {}); ignored",
                pending.kind,
                pending.token
            );
            return false;
        }

        self.pending = None;
        match pending.kind {
            TimerKind::ScanComplete => {
                self.screen = Screen::Results;
            }
            TimerKind::ReturnToLanding => {
                self.reset_cycle();
            }
        }
        log::info!("timer {token} applied {}, now on {}", pending.kind, self.screen);
        true
    }

    fn expect_screen(&self, operation: &str, expected: Screen) -> Result<()> {
        if self.screen != expected {
            bail!(
                "{operation} is only valid on the {expected} screen (current screen is {})",
                self.screen
            );
        }
        Ok(())
    }

    fn schedule(&mut self, kind: TimerKind) -> Vec<Effect> {
        let mut effects = self.cancel_pending();

        let token = TimerToken(self.next_token);
        self.next_token += 1;
        let delay = self.timings.delay_for(kind);
        self.pending = Some(PendingTransition { token, kind, delay });
        effects.push(Effect::Schedule { token, kind, delay });
        effects
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        match self.pending.take() {
            Some(pending) => vec![Effect::Cancel(pending.token)],
            None => Vec::new(),
        }
    }

    fn reset_cycle(&mut self) {
        self.screen = Screen::Landing;
        self.permission = PermissionState::Unset;
    }
}
