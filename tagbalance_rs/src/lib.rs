//! # tagbalance
//!
//! **Structural diagnostics for large generated front-end files.** Finds the
//! `<div>` that was never closed, the region where closes outnumber opens,
//! and the brace that drifted, inside a chosen window of lines.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use tagbalance::checks::scan;
//! use tagbalance::source::Window;
//! use tagbalance::tokens::TagToken;
//!
//! let lines = ["<div>", "  <span>text</span>", "</div>"];
//! let div = TagToken::new("div").unwrap();
//! assert!(scan(&lines, Window::new(0, 2), &div).is_empty());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! tagscan unclosed src/pages/Submit.tsx --lines 1520:2345
//! tagscan trace src/pages/Submit.tsx --lines 1520:2345 --token section
//! tagscan count src/pages/Submit.tsx --window case1
//! tagscan comments src/pages/Submit.tsx --lines 2457:3066
//! ```

/// Line-window diagnostics: unclosed tags, balance trace, delimiter
/// counts and comment-only regions.
pub mod checks;

/// `tagscan` argument model, dispatch and text rendering.
pub mod cli;

/// ANSI color helpers for human output.
pub mod colors;

/// Optional `.tagscan/config.toml` with a default token and named windows.
pub mod config;

pub mod error;

/// Source files as immutable lines, and the windows scanned over them.
pub mod source;

/// Tag names and OPEN/CLOSE occurrence extraction.
pub mod tokens;

pub mod types;

pub use error::{Error, Result};
