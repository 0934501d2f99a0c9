//! Color support detection

use std::env;

/// Determine if the clock should be drawn in color.
///
/// The clock only ever draws to a terminal, so unlike piped output there is
/// no TTY check here: colors are on unless the environment turns them off.
pub fn should_use_colors() -> bool {
    colors_enabled(
        env::var_os("NO_COLOR").is_some(),
        env::var("CLICOLOR_FORCE").ok().as_deref(),
        env::var("CLICOLOR").ok().as_deref(),
    )
}

fn colors_enabled(no_color: bool, clicolor_force: Option<&str>, clicolor: Option<&str>) -> bool {
    // NO_COLOR takes precedence (https://no-color.org/)
    if no_color {
        return false;
    }

    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }

    clicolor != Some("0")
}
