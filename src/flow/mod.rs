//! Page flow controller for the landing -> camera -> results -> finish cycle.

pub mod controller;
pub mod scheduler;
pub mod types;

pub use controller::FlowController;
pub use scheduler::Scheduler;
pub use types::*;
