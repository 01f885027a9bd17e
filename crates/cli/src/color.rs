// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. stdout is not a TTY → no color (the usual pre-commit case)

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Color flags from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorFlags {
    /// `--color`: force color on.
    pub force: bool,
    /// `--no-color`: force color off.
    pub disable: bool,
}

/// Resolve color choice from flags, environment variables and the terminal.
pub fn resolve_color(flags: ColorFlags) -> ColorChoice {
    choose(
        flags,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

/// Pure decision behind [`resolve_color`].
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty) disables color.
fn choose(flags: ColorFlags, no_color_env: bool, color_env: bool, is_tty: bool) -> ColorChoice {
    if flags.disable {
        return ColorChoice::Never;
    }
    if flags.force {
        return ColorChoice::Always;
    }
    if no_color_env {
        return ColorChoice::Never;
    }
    if color_env {
        return ColorChoice::Always;
    }
    if !is_tty {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for diagnostics.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
