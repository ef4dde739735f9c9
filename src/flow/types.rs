use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use strum::{Display, EnumIter, IntoStaticStr};

/// The four mutually exclusive views of the flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Landing,
    Camera,
    Results,
    Finish,
}

/// Outcome of the camera permission prompt. `Unset` means the prompt is showing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    #[default]
    Unset,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn from_choice(granted: bool) -> Self {
        if granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }
}

/// Confidence percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Result<Self> {
        if percent > Self::MAX {
            bail!("confidence must be within 0..=100, got {percent}");
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, suitable for gauges.
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl TryFrom<u8> for Confidence {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Confidence::new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Payload shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub instructions: Vec<String>,
    pub category: String,
    pub confidence: Confidence,
}

impl ScanResult {
    /// The hardcoded result used in place of real inference output.
    pub fn fixture() -> Self {
        Self {
            instructions: vec![
                "Separate bottle cap".to_string(),
                "Drain remaining soup".to_string(),
                "Remove plastic wrapper".to_string(),
            ],
            category: "Mixed Waste".to_string(),
            confidence: Confidence(87),
        }
    }
}

impl Default for ScanResult {
    fn default() -> Self {
        Self::fixture()
    }
}

/// Identifies one scheduled transition. Tokens are never reused within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Camera -> Results once the simulated scan is done.
    ScanComplete,
    /// Finish -> Landing, closing the flow cycle.
    ReturnToLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub delay: Duration,
}

/// Timer instructions returned by the controller. The controller never owns timers itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Schedule {
        token: TimerToken,
        kind: TimerKind,
        delay: Duration,
    },
    Cancel(TimerToken),
}

/// User actions the screens can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Start,
    CameraPermission(bool),
    Retry,
    Finish,
    Abort,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Start => write!(f, "Start"),
            Intent::CameraPermission(granted) => write!(f, "CameraPermission({granted})"),
            Intent::Retry => write!(f, "Retry"),
            Intent::Finish => write!(f, "Finish"),
            Intent::Abort => write!(f, "Abort"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTimings {
    pub scan_delay: Duration,
    pub finish_delay: Duration,
}

impl FlowTimings {
    pub const DEFAULT_SCAN_DELAY_MS: u64 = 3000;
    pub const DEFAULT_FINISH_DELAY_MS: u64 = 5000;

    pub fn from_millis(scan_delay_ms: u64, finish_delay_ms: u64) -> Self {
        Self {
            scan_delay: Duration::from_millis(scan_delay_ms),
            finish_delay: Duration::from_millis(finish_delay_ms),
        }
    }

    pub fn delay_for(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::ScanComplete => self.scan_delay,
            TimerKind::ReturnToLanding => self.finish_delay,
        }
    }
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_SCAN_DELAY_MS, Self::DEFAULT_FINISH_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_accepts_bounds() -> Result<()> {
        assert_eq!(Confidence::new(0)?.percent(), 0);
        assert_eq!(Confidence::new(100)?.percent(), 100);
        assert_eq!(Confidence::new(100)?.ratio(), 1.0);
        Ok(())
    }

    #[test]
    fn confidence_rejects_out_of_range() {
        assert!(Confidence::new(101).is_err());
        assert!(Confidence::new(u8::MAX).is_err());
    }

    #[test]
    fn confidence_deserialization_is_validated() {
        let ok: Confidence = serde_json::from_str("42").expect("42 is in range");
        assert_eq!(ok.percent(), 42);
        assert!(serde_json::from_str::<Confidence>("150").is_err());
    }

    #[test]
    fn fixture_matches_published_values() {
        let fixture = ScanResult::fixture();
        assert_eq!(
            fixture.instructions,
            vec![
                "Separate bottle cap",
                "Drain remaining soup",
                "Remove plastic wrapper"
            ]
        );
        assert_eq!(fixture.category, "Mixed Waste");
        assert_eq!(fixture.confidence.percent(), 87);
        assert_eq!(fixture.confidence.to_string(), "87%");
    }

    #[test]
    fn timings_default_to_scripted_delays() {
        let timings = FlowTimings::default();
        assert_eq!(timings.delay_for(TimerKind::ScanComplete), Duration::from_secs(3));
        assert_eq!(timings.delay_for(TimerKind::ReturnToLanding), Duration::from_secs(5));
    }

    #[test]
    fn intent_display_names() {
        assert_eq!(Intent::Start.to_string(), "Start");
        assert_eq!(Intent::CameraPermission(true).to_string(), "CameraPermission(true)");
    }
}
