//! Input loop
//!
//! Blocks on terminal events in a dedicated thread and forwards the ones
//! the clock cares about over a channel. It never touches the surface.

use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Requests from the input loop to the render loop
#[derive(Debug)]
pub enum Signal {
    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),
    /// User asked to quit
    Quit,
    /// Reading terminal input failed; the input loop has stopped
    Failed(io::Error),
}

/// Esc, Ctrl-C or `q`
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => true,
        _ => false,
    }
}

/// Translate a terminal event; `None` for events the clock ignores
pub fn classify(event: &Event) -> Option<Signal> {
    match event {
        Event::Resize(width, height) => Some(Signal::Resize(*width, *height)),
        Event::Key(key) if is_quit_key(key) => Some(Signal::Quit),
        _ => None,
    }
}

/// Spawn the input thread.
///
/// The thread exits after sending `Quit` or `Failed`, or once the receiver
/// is gone.
pub fn spawn(tx: Sender<Signal>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("glock-input".to_string())
        .spawn(move || forward(event::read, &tx))
}

fn forward<R>(mut read: R, tx: &Sender<Signal>)
where
    R: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match read() {
            Ok(event) => event,
            Err(e) => {
                let failure = io::Error::new(e.kind(), format!("cannot read terminal input: {}", e));
                let _ = tx.send(Signal::Failed(failure));
                return;
            }
        };

        if let Some(signal) = classify(&event) {
            let quit = matches!(signal, Signal::Quit);
            if tx.send(signal).is_err() || quit {
                return;
            }
        }
    }
}
