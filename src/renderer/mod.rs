//! Clock renderer module
//!
//! Paints one frame of the clock: formats the time, lays out the glyphs
//! around the center of the surface and draws the date line.

pub mod glyph;
pub mod layout;

use std::io;

use chrono::NaiveDateTime;

use crate::display::{CellStyle, Surface};
use crate::models::DisplayConfig;

/// Date line format, always 10 characters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Character used for glyph cells when colors are off
const MONO_BLOCK: char = '█';

/// Clock renderer
pub struct Renderer<'a> {
    config: &'a DisplayConfig,
    colors: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a DisplayConfig, colors: bool) -> Self {
        Self { config, colors }
    }

    /// Format the time string for the configured mode
    pub fn format_time(&self, now: &NaiveDateTime) -> String {
        now.format(self.config.mode().time_format()).to_string()
    }

    /// Format the date line
    pub fn format_date(&self, now: &NaiveDateTime) -> String {
        now.format(DATE_FORMAT).to_string()
    }

    /// Draw one complete frame and show it
    pub fn render<S: Surface>(&self, surface: &mut S, now: &NaiveDateTime) -> io::Result<()> {
        surface.clear();

        // Size is queried every frame so a resize re-centers on the next tick.
        let (width, height) = surface.size()?;
        let center_x = i32::from(width / 2);
        let center_y = i32::from(height / 2);

        let (block, block_style) = self.block_style();

        let time = self.format_time(now);
        for placement in layout::layout(&time, self.config.mode()) {
            let Some(pattern) = glyph::pattern(placement.ch) else {
                continue;
            };
            let origin = center_x + placement.offset;
            for (dx, dy) in pattern.cells() {
                surface.set_cell(origin + dx, center_y + dy, block, block_style);
            }
        }

        if self.config.show_date {
            self.draw_date(surface, width, height, now);
        }

        surface.show()
    }

    fn draw_date<S: Surface>(&self, surface: &mut S, width: u16, height: u16, now: &NaiveDateTime) {
        let date = self.format_date(now);
        let (x, y) = layout::date_origin(width, height, date.chars().count());
        let style = if self.colors {
            CellStyle::fg(self.config.color.to_terminal())
        } else {
            CellStyle::default()
        };

        for (ch, column) in date.chars().zip(x..) {
            surface.set_cell(column, y, ch, style);
        }
    }

    fn block_style(&self) -> (char, CellStyle) {
        if self.colors {
            (' ', CellStyle::bg(self.config.color.to_terminal()))
        } else {
            (MONO_BLOCK, CellStyle::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::surface::testing::MemorySurface;
    use crate::models::ClockColor;
    use chrono::NaiveDate;
    use crossterm::style::Color;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    fn config(show_seconds: bool, show_12_hour: bool) -> DisplayConfig {
        DisplayConfig {
            show_seconds,
            show_12_hour,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_format_24_hour_seconds() {
        let config = config(true, false);
        assert_eq!(Renderer::new(&config, true).format_time(&instant()), "14:07:09");
    }

    #[test]
    fn test_format_24_hour() {
        let config = config(false, false);
        assert_eq!(Renderer::new(&config, true).format_time(&instant()), "14:07");
    }

    #[test]
    fn test_format_12_hour() {
        let config = config(false, true);
        assert_eq!(Renderer::new(&config, true).format_time(&instant()), "02:07PM");
    }

    #[test]
    fn test_format_12_hour_seconds_morning() {
        let config = config(true, true);
        let morning = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(Renderer::new(&config, true).format_time(&morning), "12:05:00AM");
    }

    #[test]
    fn test_format_date_independent_of_mode() {
        for (seconds, meridiem) in [(false, false), (true, false), (false, true), (true, true)] {
            let config = config(seconds, meridiem);
            assert_eq!(
                Renderer::new(&config, true).format_date(&instant()),
                "2024-03-05"
            );
        }
    }

    #[test]
    fn test_render_draws_clock_and_date() {
        let config = config(false, false);
        let renderer = Renderer::new(&config, true);
        let mut surface = MemorySurface::new(80, 24);

        renderer.render(&mut surface, &instant()).unwrap();

        assert_eq!(surface.shows, 1);
        // "14:07" starts at 40 - 17; the top bar of '1' is two cells in.
        assert_eq!(surface.cells.get(&(25, 10)), Some(&(' ', CellStyle::bg(Color::Green))));
        assert_eq!(surface.leftmost_filled(), Some(23));
        assert_eq!(surface.row(17).trim(), "2024-03-05");
        assert_eq!(surface.row(17).find('2'), Some(35));
    }

    #[test]
    fn test_render_without_date() {
        let config = DisplayConfig {
            show_date: false,
            ..DisplayConfig::default()
        };
        let mut surface = MemorySurface::new(80, 24);

        Renderer::new(&config, true)
            .render(&mut surface, &instant())
            .unwrap();

        assert!(surface.row(17).trim().is_empty());
    }

    #[test]
    fn test_render_12_hour_draws_meridiem() {
        let config = config(false, true);
        let mut surface = MemorySurface::new(80, 24);

        Renderer::new(&config, true)
            .render(&mut surface, &instant())
            .unwrap();

        // 'P' at offset 14: full top bar; 'M' at offset 21: split top row.
        let top = 12 - 2;
        for x in 54..60 {
            assert!(surface.cells.contains_key(&(x, top)), "P top bar at {}", x);
        }
        assert!(surface.cells.contains_key(&(61, top)));
        assert!(!surface.cells.contains_key(&(63, top)));
        assert!(surface.cells.contains_key(&(65, top)));
    }

    #[test]
    fn test_render_uses_configured_color() {
        let config = DisplayConfig {
            color: ClockColor::Magenta,
            ..DisplayConfig::default()
        };
        let mut surface = MemorySurface::new(80, 24);

        Renderer::new(&config, true)
            .render(&mut surface, &instant())
            .unwrap();

        let (_, date_style) = surface.cells[&(35, 17)];
        assert_eq!(date_style, CellStyle::fg(Color::Magenta));
        assert!(surface
            .cells
            .values()
            .filter(|(ch, _)| *ch == ' ')
            .all(|(_, style)| style.bg == Some(Color::Magenta)));
    }

    #[test]
    fn test_render_without_colors_uses_blocks() {
        let config = DisplayConfig::default();
        let mut surface = MemorySurface::new(80, 24);

        Renderer::new(&config, false)
            .render(&mut surface, &instant())
            .unwrap();

        assert!(surface
            .cells
            .values()
            .all(|(_, style)| *style == CellStyle::default()));
        assert_eq!(surface.cells.get(&(25, 10)).map(|(ch, _)| *ch), Some(MONO_BLOCK));
    }

    #[test]
    fn test_render_recenters_after_resize() {
        let config = DisplayConfig::default();
        let renderer = Renderer::new(&config, true);
        let mut surface = MemorySurface::new(80, 24);

        renderer.render(&mut surface, &instant()).unwrap();
        assert_eq!(surface.leftmost_filled(), Some(40 - 17));

        surface.width = 120;
        surface.height = 40;
        renderer.render(&mut surface, &instant()).unwrap();

        assert_eq!(surface.leftmost_filled(), Some(60 - 17));
        assert_eq!(surface.row(25).find('2'), Some(55));
        assert!(surface.row(17).trim().is_empty());
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let config = DisplayConfig::default();
        let renderer = Renderer::new(&config, true);
        let mut surface = MemorySurface::new(80, 24);

        surface.set_cell(0, 0, 'x', CellStyle::default());
        renderer.render(&mut surface, &instant()).unwrap();

        assert!(!surface.cells.contains_key(&(0, 0)));
    }

    #[test]
    fn test_render_on_tiny_surface_does_not_panic() {
        let config = config(true, true);
        let mut surface = MemorySurface::new(3, 2);

        Renderer::new(&config, true)
            .render(&mut surface, &instant())
            .unwrap();

        assert!(surface.cells.keys().all(|(x, y)| *x < 3 && *y < 2));
    }

    #[test]
    fn test_render_propagates_show_failure() {
        let config = DisplayConfig::default();
        let mut surface = MemorySurface {
            fail_show: true,
            ..MemorySurface::new(80, 24)
        };

        let result = Renderer::new(&config, true).render(&mut surface, &instant());
        assert!(result.is_err());
    }
}
