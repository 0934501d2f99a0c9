//! Clock loops
//!
//! The render loop (`tick`) owns the surface and draws once per second.
//! The input loop (`input`) runs on its own thread and only sends signals.

pub mod input;
pub mod tick;

pub use input::Signal;
