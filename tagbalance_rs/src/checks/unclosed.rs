//! Tag balance scanner.
//!
//! Walks the OPEN/CLOSE occurrences of one tag through an open stack and
//! reports the OPENs that are still on the stack when the window ends.
//!
//! ```
//! use tagbalance::checks::unclosed::scan;
//! use tagbalance::source::Window;
//! use tagbalance::tokens::TagToken;
//!
//! let div = TagToken::new("div").unwrap();
//! let lines = ["<div>", "  <span>text</span>", ""];
//! let unclosed = scan(&lines, Window::new(0, 2), &div);
//! assert_eq!(unclosed.iter().map(|u| u.line).collect::<Vec<_>>(), vec![1]);
//! ```

use serde::Serialize;
use tracing::trace;

use crate::source::Window;
use crate::tokens::{TagKind, TagToken, occurrences};

/// An OPEN occurrence that never met its CLOSE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnclosedTag {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Trimmed source line, for context
    pub text: String,
}

/// Scan result with the counters the CLI prints alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct UnclosedReport {
    pub token: String,
    pub window: Window,
    pub unclosed: Vec<UnclosedTag>,
    /// OPENs pushed on the stack
    pub opened: usize,
    /// CLOSEs that popped an OPEN
    pub closed: usize,
    /// CLOSEs seen with an empty stack, dropped
    pub stray_closes: usize,
    /// Self-closing or void OPENs, never pushed
    pub skipped_opens: usize,
}

impl UnclosedReport {
    pub fn is_balanced(&self) -> bool {
        self.unclosed.is_empty()
    }

    pub fn line_numbers(&self) -> Vec<usize> {
        self.unclosed.iter().map(|tag| tag.line).collect()
    }
}

/// Unmatched OPENs of `token` inside `window`, in push order.
pub fn scan<S: AsRef<str>>(lines: &[S], window: Window, token: &TagToken) -> Vec<UnclosedTag> {
    scan_report(lines, window, token).unclosed
}

pub fn scan_report<S: AsRef<str>>(lines: &[S], window: Window, token: &TagToken) -> UnclosedReport {
    let mut stack = Vec::new();
    let mut report = UnclosedReport {
        token: token.name().to_string(),
        window,
        unclosed: Vec::new(),
        opened: 0,
        closed: 0,
        stray_closes: 0,
        skipped_opens: 0,
    };

    for occ in occurrences(lines, window, token) {
        match occ.kind {
            TagKind::Open if token.pushes(&occ) => {
                report.opened += 1;
                stack.push(occ);
            }
            TagKind::Open => report.skipped_opens += 1,
            TagKind::Close => match stack.pop() {
                Some(open) => {
                    trace!(open = open.line, close = occ.line, "matched {}", token);
                    report.closed += 1;
                }
                None => report.stray_closes += 1,
            },
        }
    }

    report.unclosed = stack
        .into_iter()
        .map(|open| UnclosedTag {
            line: open.line,
            column: open.column,
            text: lines[open.line - 1].as_ref().trim().to_string(),
        })
        .collect();
    report
}
