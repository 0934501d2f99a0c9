//! Cell-addressable drawing surface
//!
//! [`Surface`] is what the renderer paints on. [`TerminalSurface`] backs it
//! with crossterm: cells go to a back buffer and `show` writes the whole
//! frame. [`SurfaceGuard`] owns a surface and finalizes it exactly once.

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::error::{GlockError, Result};

/// Colors of a single cell; `None` keeps the terminal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellStyle {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    pub fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
        }
    }
}

pub trait Surface {
    /// Blank every cell
    fn clear(&mut self);

    /// Current size as (columns, rows), queried fresh on every call
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Write one cell. Positions outside the surface are ignored.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: CellStyle);

    /// Push the current cells to the screen
    fn show(&mut self) -> io::Result<()>;

    /// Forget what is on screen so the next `show` repaints everything.
    /// Does not draw by itself.
    fn sync(&mut self) -> io::Result<()>;

    /// Give the terminal back to the user
    fn finalize(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: CellStyle,
}

const BLANK: Cell = Cell {
    ch: ' ',
    style: CellStyle { fg: None, bg: None },
};

/// Full-screen crossterm surface on stdout
pub struct TerminalSurface {
    out: Stdout,
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    full_redraw: bool,
}

impl TerminalSurface {
    /// Enter raw mode and the alternate screen.
    ///
    /// Fails with [`GlockError::Terminal`] when stdout is not a terminal.
    pub fn init() -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(GlockError::Terminal("stdout is not a terminal".to_string()));
        }

        terminal::enable_raw_mode()
            .map_err(|e| GlockError::Terminal(format!("cannot enable raw mode: {}", e)))?;

        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(GlockError::Terminal(format!(
                "cannot enter alternate screen: {}",
                e
            )));
        }

        log::debug!("terminal initialized");
        Ok(Self {
            out,
            width: 0,
            height: 0,
            cells: Vec::new(),
            full_redraw: true,
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let (width, height) = (usize::from(self.width), usize::from(self.height));
        (x < width && y < height).then_some(y * width + x)
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        let (width, height) = terminal::size()?;
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.cells = vec![BLANK; usize::from(width) * usize::from(height)];
            self.full_redraw = true;
        }
        Ok((width, height))
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    fn show(&mut self) -> io::Result<()> {
        if self.full_redraw {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
            self.full_redraw = false;
        }

        let mut current = CellStyle::default();
        queue!(self.out, ResetColor)?;

        for (row, line) in self
            .cells
            .chunks(usize::from(self.width).max(1))
            .enumerate()
        {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, MoveTo(0, row))?;
            for cell in line {
                if cell.style != current {
                    queue!(self.out, ResetColor)?;
                    if let Some(fg) = cell.style.fg {
                        queue!(self.out, SetForegroundColor(fg))?;
                    }
                    if let Some(bg) = cell.style.bg {
                        queue!(self.out, SetBackgroundColor(bg))?;
                    }
                    current = cell.style;
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn sync(&mut self) -> io::Result<()> {
        self.full_redraw = true;
        Ok(())
    }

    fn finalize(&mut self) -> io::Result<()> {
        restore(&mut self.out, terminal::disable_raw_mode)?;
        log::debug!("terminal restored");
        Ok(())
    }
}

/// Leave the alternate screen, then leave raw mode.
///
/// Raw mode is left even when writing the escape sequences fails; the
/// first error is returned.
fn restore<W, F>(out: &mut W, disable_raw_mode: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let screen = execute!(out, ResetColor, Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen.and(raw)
}

/// Owns a surface and finalizes it exactly once.
///
/// [`SurfaceGuard::release`] finalizes on the normal path and reports the
/// error. If the guard is dropped instead (early return, panic) the
/// surface is finalized in `Drop`.
pub struct SurfaceGuard<S: Surface> {
    surface: S,
    released: bool,
}

impl<S: Surface> SurfaceGuard<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            released: false,
        }
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn release(mut self) -> io::Result<()> {
        self.released = true;
        self.surface.finalize()
    }
}

impl<S: Surface> Drop for SurfaceGuard<S> {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            if let Err(e) = self.surface.finalize() {
                log::error!("failed to restore terminal: {}", e);
            }
        }
    }
}
