//! SilverAgent — human + agent collaboration core.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod model;
pub mod nav;
pub mod telemetry;
pub mod workstation;
