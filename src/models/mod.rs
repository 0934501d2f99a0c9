//! Data models module
//!
//! Defines the per-run display settings: ClockColor, DisplayMode, DisplayConfig.

pub mod display;

pub use display::{ClockColor, DisplayConfig, DisplayMode};
