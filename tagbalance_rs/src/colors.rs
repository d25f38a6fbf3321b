//! Terminal color utilities for CLI output.
//!
//! ANSI codes plus a [`Painter`] that turns them off for pipes and
//! `--color never`.

use std::io::IsTerminal;

use crate::types::ColorMode;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer passed to the report renderers.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { enabled: false }
    }

    /// Unclosed tags, mismatches - RED
    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    /// Negative balance, stray closes - YELLOW
    pub fn warn(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    /// Balanced - GREEN
    pub fn ok(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    /// File paths - CYAN
    pub fn path(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Headers - BOLD
    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    /// Source snippets, counters - DIM
    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    /// Tag names, rendered as `<name>` - MAGENTA
    pub fn tag(&self, name: &str) -> String {
        self.wrap(&format!("<{name}>"), MAGENTA)
    }

    /// Line numbers, counts - BRIGHT_CYAN
    pub fn number(&self, n: impl std::fmt::Display) -> String {
        self.wrap(&n.to_string(), BRIGHT_CYAN)
    }

    pub fn status_ok(&self, msg: &str) -> String {
        format!("{} {}", self.ok("[OK]"), msg)
    }

    pub fn status_warn(&self, msg: &str) -> String {
        format!("{} {}", self.warn("[WARN]"), msg)
    }

    pub fn status_error(&self, msg: &str) -> String {
        format!("{} {}", self.error("[ERROR]"), msg)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
