use std::io::IsTerminal;

/// Width used when the terminal size cannot be queried.
const FALLBACK_WIDTH: u16 = 80;
/// Widest layout the views are drawn at.
const MAX_WIDTH: u16 = 100;

/// What: Width to draw tables and panels at.
///
/// Details:
/// - Falls back to 80 columns when stdout is not a terminal and caps wide
///   terminals at 100 columns.
#[must_use]
pub fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols)
        .filter(|&cols| cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
        .min(MAX_WIDTH)
}

/// What: Decide whether output should be styled.
///
/// Inputs:
/// - `no_color_flag`: `--no-color` was given
///
/// Output:
/// - `true` only for an interactive stdout with neither `--no-color` nor `NO_COLOR`.
#[must_use]
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Whether screens should be cleared between menus.
#[must_use]
pub fn interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
