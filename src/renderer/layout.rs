//! Horizontal placement of clock glyphs
//!
//! Offsets are measured in cells from the horizontal center of the screen.
//! Digits are 6 cells wide and the colon only 2, so the step between two
//! glyphs depends on the position in the time string. That asymmetry lives
//! entirely in [`INCREMENTS`]; the painter draws every position the same way.

use crate::models::DisplayMode;
use crate::renderer::glyph::GLYPH_WIDTH;

/// Step from the previous glyph origin, indexed by position in the time
/// string. Sized for the longest form, `HH:MM:SS`.
pub const INCREMENTS: [i32; 8] = [0, 7, 6, 6, 7, 6, 6, 7];

/// Step between the two AM/PM glyphs: one glyph plus a blank column
pub const MERIDIEM_STEP: i32 = GLYPH_WIDTH + 1;

/// Rows between the vertical center and the date line
pub const DATE_ROW_OFFSET: i32 = 5;

/// Fixed geometry of one display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMetrics {
    /// Number of glyphs laid out with [`INCREMENTS`]
    pub glyph_count: usize,
    /// Offset of the first glyph
    pub start: i32,
    /// Offset of the AM/PM suffix, for 12-hour modes
    pub meridiem: Option<i32>,
}

pub fn metrics(mode: DisplayMode) -> ModeMetrics {
    match mode {
        DisplayMode::Hour24 => ModeMetrics {
            glyph_count: 5,
            start: -17,
            meridiem: None,
        },
        DisplayMode::Hour24Seconds => ModeMetrics {
            glyph_count: 8,
            start: -25,
            meridiem: None,
        },
        DisplayMode::Hour12 => ModeMetrics {
            glyph_count: 5,
            start: -26,
            meridiem: Some(14),
        },
        DisplayMode::Hour12Seconds => ModeMetrics {
            glyph_count: 8,
            start: -34,
            meridiem: Some(24),
        },
    }
}

/// A character and the offset of its glyph origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ch: char,
    pub offset: i32,
}

/// Lay out a formatted time string for `mode`.
///
/// The first `glyph_count` characters follow the increment table; in
/// 12-hour modes the next two characters are the AM/PM suffix. Anything
/// beyond that is ignored. Characters without a glyph still get a
/// placement so the positions of their neighbours do not shift.
pub fn layout(chars: &str, mode: DisplayMode) -> Vec<Placement> {
    let metrics = metrics(mode);
    let mut placements = Vec::with_capacity(metrics.glyph_count + 2);

    let mut offset = metrics.start;
    for (i, ch) in chars.chars().take(metrics.glyph_count).enumerate() {
        offset += INCREMENTS[i];
        placements.push(Placement { ch, offset });
    }

    if let Some(meridiem) = metrics.meridiem {
        let suffix = chars.chars().skip(metrics.glyph_count).take(2);
        for (k, ch) in (0..).zip(suffix) {
            placements.push(Placement {
                ch,
                offset: meridiem + k * MERIDIEM_STEP,
            });
        }
    }

    placements
}

/// Screen position of the first character of the date line
pub fn date_origin(width: u16, height: u16, len: usize) -> (i32, i32) {
    let half_len = i32::try_from(len / 2).unwrap_or(i32::MAX);
    (
        i32::from(width / 2) - half_len,
        i32::from(height / 2) + DATE_ROW_OFFSET,
    )
}
