use serde::{Deserialize, Serialize};

/// Glock configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display settings
    pub display: Display,
}

/// Display defaults, overridable from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Show seconds
    pub seconds: bool,

    /// Use 12-hour time with an AM/PM indicator
    pub meridiem: bool,

    /// Show the date line below the clock
    pub date: bool,

    /// Clock color name
    pub color: String,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            seconds: false,
            meridiem: false,
            date: true,
            color: "green".to_string(),
        }
    }
}
