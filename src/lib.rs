//! TrayWise AI - terminal front end for a tray scanning kiosk.
//!
//! The user starts a scan, grants (or denies) camera access, waits while the
//! tray is "analysed", reads the sorting recommendations and finishes, after
//! which the kiosk returns to its start screen by itself.
//!
//! [`flow`] holds the page state machine and its timer plumbing and has no
//! terminal dependencies. [`tui`] wires it to crossterm/ratatui. Boot, CLI and
//! config helpers are hidden from the generated documentation.

#[doc(hidden)]
pub mod boot;
#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod flow;
pub mod i18n;
#[doc(hidden)]
pub mod tui;

pub use boot::init_common;
pub use config::AppConfig;
pub use flow::{FlowController, Intent, Screen};
