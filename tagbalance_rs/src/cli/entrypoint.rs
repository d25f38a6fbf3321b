//! Resolves config, window and token for a parsed [`Cli`] and runs the
//! requested check.
//!
//! The file is read before anything is printed; on error stdout stays empty.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::checks::{count_delimiters, find_code_lines, scan_report, trace_balance};
use crate::cli::output::{render_comments, render_counts, render_trace, render_unclosed};
use crate::cli::{Cli, Command, TagArgs, TargetArgs};
use crate::colors::Painter;
use crate::config::TagscanConfig;
use crate::source::{SourceFile, Window};
use crate::tokens::TagToken;
use crate::types::{DEFAULT_TOKEN, OutputMode};

/// Run the CLI and return the text destined for stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    let painter = Painter::new(cli.color.or(config.color).unwrap_or_default());
    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match &cli.command {
        Command::Unclosed(args) => {
            let (source, window, token) = prepare_tag_check(args, &config)?;
            let report = scan_report(source.lines(), window, &token);
            info!(
                unclosed = report.unclosed.len(),
                stray_closes = report.stray_closes,
                "scan finished"
            );
            render(output, &report, || {
                render_unclosed(&report, source.path(), &painter)
            })
        }
        Command::Trace(args) => {
            let (source, window, token) = prepare_tag_check(args, &config)?;
            let trace = trace_balance(source.lines(), window, &token);
            info!(final_balance = trace.final_balance, "trace finished");
            render(output, &trace, || render_trace(&trace, source.path(), &painter))
        }
        Command::Count(args) => {
            let (source, window, token) = prepare_tag_check(args, &config)?;
            let counts = count_delimiters(source.lines(), window, &token);
            render(output, &counts, || {
                render_counts(&counts, source.path(), &painter)
            })
        }
        Command::Comments(args) => {
            let source = read_source(&args.file)?;
            let window = resolve_window(args, &config, &source)?;
            let report = find_code_lines(source.lines(), window);
            render(output, &report, || {
                render_comments(&report, source.path(), &painter)
            })
        }
    }
}

fn render<T: serde::Serialize>(
    output: OutputMode,
    report: &T,
    human: impl FnOnce() -> String,
) -> Result<String> {
    match output {
        OutputMode::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report")
        }
        OutputMode::Human => Ok(human()),
    }
}

fn load_config(cli: &Cli) -> Result<TagscanConfig> {
    match &cli.config {
        Some(path) => Ok(TagscanConfig::load_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok(TagscanConfig::load(&cwd))
        }
    }
}

fn read_source(path: &std::path::Path) -> Result<SourceFile> {
    SourceFile::read(path).with_context(|| format!("cannot scan {}", path.display()))
}

fn prepare_tag_check(
    args: &TagArgs,
    config: &TagscanConfig,
) -> Result<(SourceFile, Window, TagToken)> {
    let name = args
        .token
        .as_deref()
        .or(config.token.as_deref())
        .unwrap_or(DEFAULT_TOKEN);
    let token = TagToken::new(name)?;
    if token.is_void() {
        warn!("{} is a void element; its tags never need closing", token);
    }
    let source = read_source(&args.target.file)?;
    let window = resolve_window(&args.target, config, &source)?;
    info!(
        file = %source.path().display(),
        %window,
        token = %token,
        "scanning"
    );
    Ok((source, window, token))
}

fn resolve_window(
    args: &TargetArgs,
    config: &TagscanConfig,
    source: &SourceFile,
) -> Result<Window> {
    let window = match (&args.lines, &args.window) {
        (Some(spec), _) => Window::parse(spec, source.len())?,
        (None, Some(name)) => config.window(name)?,
        (None, None) => source.whole_window(),
    };

    if !source.is_empty() && !window.fits(source.len()) {
        warn!(
            %window,
            lines = source.len(),
            "window extends past the end of {}",
            source.path().display()
        );
    }
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(body: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("temp file");
        write!(tmp, "{body}").expect("write fixture");
        tmp
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).expect("parse");
        run(&cli)
    }

    #[test]
    fn unclosed_reports_line() {
        let tmp = fixture("<div>\n  <span>text</span>\n\n");
        let path = tmp.path().to_str().unwrap();
        let out = run_args(&["tagscan", "unclosed", path, "--color", "never"]).unwrap();
        assert!(out.contains("line 1:1  <div>"), "got: {out}");
    }

    #[test]
    fn json_output_is_parseable() {
        let tmp = fixture("<div>\n</div>\n<div>\n");
        let path = tmp.path().to_str().unwrap();
        let out = run_args(&["tagscan", "unclosed", path, "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["token"], "div");
        assert_eq!(value["unclosed"][0]["line"], 3);
        assert_eq!(value["window"]["first"], 1);
    }

    #[test]
    fn lines_flag_narrows_window() {
        let tmp = fixture("<div>\n<section>\n</section>\n");
        let path = tmp.path().to_str().unwrap();
        let out = run_args(&[
            "tagscan", "unclosed", path, "--lines", "2:3", "--color", "never",
        ])
        .unwrap();
        assert!(out.starts_with("[OK]"), "got: {out}");
    }

    #[test]
    fn empty_file_reports_empty_window() {
        let tmp = fixture("");
        let path = tmp.path().to_str().unwrap();
        let out = run_args(&["tagscan", "unclosed", path, "--color", "never"]).unwrap();
        assert!(out.ends_with("(lines none)"), "got: {out}");

        let json = run_args(&["tagscan", "comments", path, "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert!(value["window"].is_null());
    }

    #[test]
    fn void_token_runs_and_never_reports() {
        let tmp = fixture("<img src={a}>\n<br>\n");
        let path = tmp.path().to_str().unwrap();
        let out = run_args(&["tagscan", "unclosed", path, "--token", "img", "--color", "never"])
            .unwrap();
        assert!(out.starts_with("[OK] All <img> tags are closed"), "got: {out}");
    }

    #[test]
    fn invalid_token_is_an_error() {
        let tmp = fixture("<div>\n");
        let path = tmp.path().to_str().unwrap();
        assert!(run_args(&["tagscan", "unclosed", path, "--token", "<div>"]).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run_args(&["tagscan", "count", "/no/such/file.tsx"]).unwrap_err();
        assert!(format!("{err:#}").contains("cannot scan /no/such/file.tsx"));
    }

    #[test]
    fn named_window_comes_from_explicit_config() {
        let tmp = fixture("<div>\n// a\n// b\n");
        let config = fixture("[windows.dead]\nfirst = 2\nlast = 3\n");
        let out = run_args(&[
            "tagscan",
            "comments",
            tmp.path().to_str().unwrap(),
            "--window",
            "dead",
            "--config",
            config.path().to_str().unwrap(),
            "--color",
            "never",
        ])
        .unwrap();
        assert!(out.starts_with("[OK] Only comments"), "got: {out}");
    }

    #[test]
    fn unknown_named_window_is_an_error() {
        let tmp = fixture("<div>\n");
        let config = fixture("token = \"div\"\n");
        let result = run_args(&[
            "tagscan",
            "unclosed",
            tmp.path().to_str().unwrap(),
            "--window",
            "nope",
            "--config",
            config.path().to_str().unwrap(),
        ]);
        assert!(result.is_err());
    }
}
