use crossterm::style::Color;

/// Named clock colors accepted by `--color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockColor {
    Black,
    White,
    Blue,
    Cyan,
    #[default]
    Green,
    Magenta,
    Red,
    Yellow,
    Gray,
}

impl ClockColor {
    /// All recognized colors, in help-text order
    pub const ALL: [ClockColor; 9] = [
        ClockColor::Black,
        ClockColor::White,
        ClockColor::Blue,
        ClockColor::Cyan,
        ClockColor::Green,
        ClockColor::Magenta,
        ClockColor::Red,
        ClockColor::Yellow,
        ClockColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClockColor::Black => "black",
            ClockColor::White => "white",
            ClockColor::Blue => "blue",
            ClockColor::Cyan => "cyan",
            ClockColor::Green => "green",
            ClockColor::Magenta => "magenta",
            ClockColor::Red => "red",
            ClockColor::Yellow => "yellow",
            ClockColor::Gray => "gray",
        }
    }

    /// Look up a color by name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a user-supplied name, falling back to the default color.
    ///
    /// Empty or missing names fall back silently; unrecognized names are
    /// logged at warn level.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            None | Some("") => Self::default(),
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "unknown color '{}', using {}",
                    name,
                    Self::default().name()
                );
                Self::default()
            }),
        }
    }

    pub fn to_terminal(self) -> Color {
        match self {
            ClockColor::Black => Color::Black,
            ClockColor::White => Color::White,
            ClockColor::Blue => Color::Blue,
            ClockColor::Cyan => Color::Cyan,
            ClockColor::Green => Color::Green,
            ClockColor::Magenta => Color::Magenta,
            ClockColor::Red => Color::Red,
            ClockColor::Yellow => Color::Yellow,
            ClockColor::Gray => Color::Grey,
        }
    }
}

/// The four clock layouts: {12, 24}-hour × seconds on/off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Hour24,
    Hour24Seconds,
    Hour12,
    Hour12Seconds,
}

impl DisplayMode {
    pub fn new(show_seconds: bool, show_12_hour: bool) -> Self {
        match (show_12_hour, show_seconds) {
            (false, false) => DisplayMode::Hour24,
            (false, true) => DisplayMode::Hour24Seconds,
            (true, false) => DisplayMode::Hour12,
            (true, true) => DisplayMode::Hour12Seconds,
        }
    }

    /// chrono format string producing this mode's time string
    pub fn time_format(self) -> &'static str {
        match self {
            DisplayMode::Hour24 => "%H:%M",
            DisplayMode::Hour24Seconds => "%H:%M:%S",
            DisplayMode::Hour12 => "%I:%M%p",
            DisplayMode::Hour12Seconds => "%I:%M:%S%p",
        }
    }
}

/// Per-run display settings, fixed for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_seconds: bool,
    pub show_12_hour: bool,
    pub show_date: bool,
    pub color: ClockColor,
}

impl DisplayConfig {
    pub fn mode(&self) -> DisplayMode {
        DisplayMode::new(self.show_seconds, self.show_12_hour)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_seconds: false,
            show_12_hour: false,
            show_date: true,
            color: ClockColor::default(),
        }
    }
}
