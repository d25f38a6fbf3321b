//! Source documents and line windows.
//!
//! A [`SourceFile`] is read once and never changes afterwards. Every check
//! works on a [`Window`] of its lines.

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A whole document split into lines (terminators stripped).
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read `path` in one go. I/O failures are returned, not swallowed.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_text(path, &text);
        debug!(path = %path.display(), lines = file.len(), "loaded source");
        Ok(file)
    }

    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn whole_window(&self) -> Window {
        Window::whole(self.lines.len())
    }
}

/// Inclusive range of 0-based line indices.
///
/// Human-facing text and JSON always show 1-based line numbers instead.
/// A window with `start > end` is empty and serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "Option<LineSpan>")]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

/// 1-based inclusive view of a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub first: usize,
    pub last: usize,
}

impl From<Window> for Option<LineSpan> {
    fn from(window: Window) -> Self {
        (!window.is_empty()).then(|| LineSpan {
            first: window.first_line(),
            last: window.last_line(),
        })
    }
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Window covering a document of `line_count` lines; empty for an
    /// empty document.
    pub fn whole(line_count: usize) -> Self {
        match line_count {
            0 => Self::new(1, 0),
            n => Self::new(0, n - 1),
        }
    }

    /// Build from 1-based inclusive line numbers, as users write them.
    pub fn from_line_numbers(first: usize, last: usize) -> Result<Self> {
        if first == 0 || last == 0 || first > last {
            return Err(Error::InvalidWindow(format!("{first}:{last}")));
        }
        Ok(Self::new(first - 1, last - 1))
    }

    /// Parse `FIRST:LAST`, `FIRST:` or `:LAST` (1-based, inclusive).
    ///
    /// Open ends are filled from `line_count`.
    pub fn parse(spec: &str, line_count: usize) -> Result<Self> {
        let invalid = || Error::InvalidWindow(spec.to_string());
        let (first, last) = spec.trim().split_once(':').ok_or_else(invalid)?;

        let first = match first.trim() {
            "" => 1,
            raw => raw.parse::<usize>().map_err(|_| invalid())?,
        };
        let last = match last.trim() {
            "" => line_count.max(first),
            raw => raw.parse::<usize>().map_err(|_| invalid())?,
        };

        Self::from_line_numbers(first, last).map_err(|_| invalid())
    }

    pub fn first_line(&self) -> usize {
        self.start.saturating_add(1)
    }

    pub fn last_line(&self) -> usize {
        self.end.saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Index range actually visited for a document of `line_count` lines.
    ///
    /// Empty when the window starts past the end or is reversed; an end past
    /// the last line is clamped.
    pub fn indices(&self, line_count: usize) -> Range<usize> {
        if self.is_empty() || self.start >= line_count {
            return 0..0;
        }
        self.start..self.end.saturating_add(1).min(line_count)
    }

    /// True when every line of the window exists in the document.
    pub fn fits(&self, line_count: usize) -> bool {
        self.start <= self.end && self.end < line_count
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        write!(f, "{}-{}", self.first_line(), self.last_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_closed_range() {
        let w = Window::parse("1520:2345", 5000).expect("valid");
        assert_eq!(w, Window::new(1519, 2344));
        assert_eq!(w.to_string(), "1520-2345");
    }

    #[test]
    fn parses_open_ends() {
        assert_eq!(Window::parse(":10", 50).unwrap(), Window::new(0, 9));
        assert_eq!(Window::parse("40:", 50).unwrap(), Window::new(39, 49));
    }

    #[test]
    fn rejects_bad_ranges() {
        for bad in ["", "12", "0:5", "9:3", "a:b", "3:x"] {
            assert!(
                matches!(Window::parse(bad, 100), Err(Error::InvalidWindow(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn indices_clamp_and_empty() {
        assert_eq!(Window::new(0, 2).indices(3), 0..3);
        assert_eq!(Window::new(1, 99).indices(3), 1..3);
        assert_eq!(Window::new(5, 9).indices(3), 0..0);
        assert_eq!(Window::new(2, 1).indices(3), 0..0);
        assert!(Window::whole(0).indices(0).is_empty());
    }

    #[test]
    fn open_ended_window_clamps_without_overflow() {
        let w = Window::new(0, usize::MAX);
        assert_eq!(w.indices(1), 0..1);
        assert_eq!(w.last_line(), usize::MAX);
        assert!(!w.fits(1));
    }

    #[test]
    fn empty_document_has_empty_window() {
        let w = Window::whole(0);
        assert!(w.is_empty());
        assert_eq!(w.to_string(), "none");
        assert_eq!(
            serde_json::to_value(w).expect("serialize"),
            serde_json::Value::Null
        );
        assert_eq!(SourceFile::from_text("empty.tsx", "").whole_window(), w);
    }

    #[test]
    fn fits_reports_out_of_range_windows() {
        assert!(Window::new(0, 2).fits(3));
        assert!(!Window::new(0, 3).fits(3));
    }

    #[test]
    fn reads_file_and_strips_terminators() {
        let mut tmp = NamedTempFile::new().expect("temp file");
        write!(tmp, "<div>\r\n  text\n</div>\n").expect("write");

        let file = SourceFile::read(tmp.path()).expect("read");
        assert_eq!(file.lines(), ["<div>", "  text", "</div>"]);
        assert_eq!(file.whole_window(), Window::new(0, 2));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SourceFile::read(Path::new("/definitely/not/here.tsx")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn window_serializes_as_line_numbers() {
        let json = serde_json::to_value(Window::new(0, 2)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "first": 1, "last": 3 }));
    }
}
