//! Terminal display module
//!
//! The drawing surface, its crossterm backend and color detection.

pub mod surface;
mod terminal;

pub use surface::{CellStyle, Surface, SurfaceGuard, TerminalSurface};
pub use terminal::should_use_colors;
