//! Command-line interface for the `tagscan` binary.
//!
//! - [`Cli`] - clap argument model
//! - [`entrypoint`] - config/window/token resolution and dispatch
//! - [`output`] - human-readable renderers

pub mod entrypoint;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::ColorMode;

/// Find unclosed tags and delimiter drift in large generated source files.
#[derive(Parser, Debug)]
#[command(name = "tagscan")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Colorize output (auto, always, never)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Config file (default: .tagscan/config.toml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List OPEN tags that are never closed inside the window
    Unclosed(TagArgs),
    /// Show the running open/close balance line by line
    Trace(TagArgs),
    /// Count braces, parens, brackets and tags in the window
    Count(TagArgs),
    /// Check that the window holds only comments and blank lines
    Comments(TargetArgs),
}

/// File plus the line window to look at.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Source file to scan
    pub file: PathBuf,

    /// Line window, 1-based and inclusive: FIRST:LAST, FIRST: or :LAST
    #[arg(short, long, value_name = "FIRST:LAST", conflicts_with = "window")]
    pub lines: Option<String>,

    /// Named window from the config file
    #[arg(short, long, value_name = "NAME")]
    pub window: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TagArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Tag name to track (default: config `token`, then `div`)
    #[arg(short, long, value_name = "NAME")]
    pub token: Option<String>,
}
