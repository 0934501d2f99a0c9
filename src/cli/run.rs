use chrono::Local;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use crate::clock::{input, tick};
use crate::config::{self, Config};
use crate::display::{self, SurfaceGuard, TerminalSurface};
use crate::error::Result;
use crate::models::{ClockColor, DisplayConfig};
use crate::renderer::Renderer;

/// Command-line display options
#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub seconds: bool,
    pub meridiem: bool,
    pub no_date: bool,
    pub color: Option<String>,
}

/// Merge the config file with command-line flags
pub fn resolve_display(file: &Config, options: &RunOptions) -> DisplayConfig {
    let color = options.color.as_deref().unwrap_or(&file.display.color);

    DisplayConfig {
        show_seconds: file.display.seconds || options.seconds,
        show_12_hour: file.display.meridiem || options.meridiem,
        show_date: file.display.date && !options.no_date,
        color: ClockColor::resolve(Some(color)),
    }
}

/// Run the clock until the user quits
pub fn run(options: RunOptions) -> Result<()> {
    let file = match &options.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let display_config = resolve_display(&file, &options);
    log::debug!("display settings: {:?}", display_config);

    let renderer = Renderer::new(&display_config, display::should_use_colors());

    let mut guard = SurfaceGuard::new(TerminalSurface::init()?);
    let (tx, rx) = mpsc::channel();
    input::spawn(tx)?;

    let result = tick::run(guard.surface_mut(), &renderer, &rx, || {
        Local::now().naive_local()
    });

    // Restore the terminal before any drawing error reaches the user.
    let released = guard.release();
    finish(result, released)
}

/// Combine the render loop outcome with the terminal restore outcome.
///
/// The loop error wins; a restore failure on top of it is only logged.
fn finish(result: io::Result<()>, released: io::Result<()>) -> Result<()> {
    match (result, released) {
        (Err(e), Err(restore)) => {
            log::error!("failed to restore terminal: {}", restore);
            Err(e.into())
        }
        (result, released) => {
            result?;
            released?;
            Ok(())
        }
    }
}
