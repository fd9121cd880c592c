//! Infrastructure layer - Port traits and their adapters.

pub mod app_settings;
pub mod catalog;
pub mod clock;
pub mod persistence;
pub mod ports;
pub mod telemetry;
