//! Render loop
//!
//! Draws a frame, then idles until the next wall-clock second. While idle
//! it drains signals from the input loop: a resize asks the surface to
//! resync (the repaint happens on the next tick), a quit ends the loop and
//! an input failure ends it with an error.

use std::io;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use chrono::{NaiveDateTime, Timelike};

use crate::clock::Signal;
use crate::display::Surface;
use crate::renderer::Renderer;

const SECOND: Duration = Duration::from_secs(1);

/// Time left until the next whole second
pub fn until_next_second(now: &NaiveDateTime) -> Duration {
    // nanosecond() exceeds 999_999_999 during a leap second
    let nanos = now.nanosecond().min(999_999_999);
    SECOND - Duration::from_nanos(u64::from(nanos))
}

/// Run until a quit signal arrives.
///
/// `now` supplies the wall-clock time for each frame and is called once per
/// frame. A frame that overruns its second is followed by the next frame
/// straight away. An input failure or a vanished input thread ends the loop
/// with an error.
pub fn run<S, F>(
    surface: &mut S,
    renderer: &Renderer,
    signals: &Receiver<Signal>,
    mut now: F,
) -> io::Result<()>
where
    S: Surface,
    F: FnMut() -> NaiveDateTime,
{
    loop {
        let started = Instant::now();
        let frame_time = now();
        renderer.render(surface, &frame_time)?;

        let deadline = started + until_next_second(&frame_time);
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match signals.recv_timeout(remaining) {
                Ok(Signal::Resize(width, height)) => {
                    log::debug!("terminal resized to {}x{}", width, height);
                    surface.sync()?;
                }
                Ok(Signal::Quit) => return Ok(()),
                Ok(Signal::Failed(e)) => return Err(e),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(io::Error::other("input thread stopped unexpectedly"))
                }
                Err(RecvTimeoutError::Timeout) => break,
            }
        }
    }
}
