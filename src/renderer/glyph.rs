//! Block glyphs for the clock face
//!
//! Every glyph lives in a 6-column by 5-row box. Columns run 0..6 from the
//! glyph origin, rows run -2..=2 around the vertical center of the screen.
//! A glyph is a short list of horizontal runs of filled cells.

/// Width of a glyph box in cells
pub const GLYPH_WIDTH: i32 = 6;

/// A horizontal run of filled cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub dx: i32,
    pub dy: i32,
    pub len: i32,
}

const fn run(dx: i32, dy: i32, len: i32) -> Run {
    Run { dx, dy, len }
}

/// The drawing of one character
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphPattern {
    pub runs: &'static [Run],
}

impl GlyphPattern {
    /// Leftmost filled column and the column just past the rightmost one
    #[cfg(test)]
    pub fn extent(&self) -> (i32, i32) {
        let start = self.runs.iter().map(|r| r.dx).min().unwrap_or(0);
        let end = self.runs.iter().map(|r| r.dx + r.len).max().unwrap_or(0);
        (start, end)
    }

    /// Every filled cell as (column, row) relative to the origin
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.runs
            .iter()
            .flat_map(|r| (0..r.len).map(move |k| (r.dx + k, r.dy)))
    }
}

const ZERO: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 2),
        run(4, 0, 2),
        run(0, 1, 2),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

const ONE: GlyphPattern = GlyphPattern {
    runs: &[
        run(2, -2, 2),
        run(0, -1, 4),
        run(2, 0, 2),
        run(2, 1, 2),
        run(0, 2, 6),
    ],
};

const TWO: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(4, -1, 2),
        run(0, 0, 6),
        run(0, 1, 2),
        run(0, 2, 6),
    ],
};

const THREE: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(4, -1, 2),
        run(0, 0, 6),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

const FOUR: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 2),
        run(4, -2, 2),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 6),
        run(4, 1, 2),
        run(4, 2, 2),
    ],
};

const FIVE: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(0, 0, 6),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

const SIX: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(0, 0, 6),
        run(0, 1, 2),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

const SEVEN: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(4, -1, 2),
        run(4, 0, 2),
        run(4, 1, 2),
        run(4, 2, 2),
    ],
};

const EIGHT: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 6),
        run(0, 1, 2),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

const NINE: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 6),
        run(4, 1, 2),
        run(0, 2, 6),
    ],
};

// Two dots in the middle of the box; narrower than the digits.
const COLON: GlyphPattern = GlyphPattern {
    runs: &[run(2, -1, 2), run(2, 1, 2)],
};

const LETTER_A: GlyphPattern = GlyphPattern {
    runs: &[
        run(1, -2, 4),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 6),
        run(0, 1, 2),
        run(4, 1, 2),
        run(0, 2, 2),
        run(4, 2, 2),
    ],
};

const LETTER_P: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 6),
        run(0, -1, 2),
        run(4, -1, 2),
        run(0, 0, 6),
        run(0, 1, 2),
        run(0, 2, 2),
    ],
};

const LETTER_M: GlyphPattern = GlyphPattern {
    runs: &[
        run(0, -2, 2),
        run(4, -2, 2),
        run(0, -1, 6),
        run(0, 0, 2),
        run(4, 0, 2),
        run(0, 1, 2),
        run(4, 1, 2),
        run(0, 2, 2),
        run(4, 2, 2),
    ],
};

static GLYPHS: [(char, &GlyphPattern); 14] = [
    ('0', &ZERO),
    ('1', &ONE),
    ('2', &TWO),
    ('3', &THREE),
    ('4', &FOUR),
    ('5', &FIVE),
    ('6', &SIX),
    ('7', &SEVEN),
    ('8', &EIGHT),
    ('9', &NINE),
    (':', &COLON),
    ('A', &LETTER_A),
    ('P', &LETTER_P),
    ('M', &LETTER_M),
];

/// Look up the glyph for `ch`. Returns `None` for characters without one.
pub fn pattern(ch: char) -> Option<&'static GlyphPattern> {
    GLYPHS
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, glyph)| *glyph)
}
