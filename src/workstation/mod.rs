//! Collaboration workstation: task list state and change events.

pub mod controller;
pub mod event;

pub use controller::{DEFAULT_GOAL, Workstation, efficiency};
pub use event::WorkstationEvent;
