//! Running open/close balance of one tag, line by line.
//!
//! Unlike the stack scanner, stray CLOSEs are not dropped here: they drive
//! the balance negative, which pinpoints where a region closes more than it
//! opened.

use serde::Serialize;

use crate::source::Window;
use crate::tokens::{TagKind, TagToken, occurrences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceStep {
    pub line: usize,
    pub delta: i64,
    /// Balance after this line
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceTrace {
    pub token: String,
    pub window: Window,
    /// Lines with a non-zero delta only
    pub steps: Vec<BalanceStep>,
    /// Lines after which the balance was below zero
    pub negative_lines: Vec<usize>,
    pub final_balance: i64,
}

impl BalanceTrace {
    pub fn is_balanced(&self) -> bool {
        self.final_balance == 0 && self.negative_lines.is_empty()
    }
}

pub fn trace_balance<S: AsRef<str>>(lines: &[S], window: Window, token: &TagToken) -> BalanceTrace {
    let mut deltas: Vec<(usize, i64)> = Vec::new();
    for occ in occurrences(lines, window, token) {
        let delta = match occ.kind {
            TagKind::Close => -1,
            TagKind::Open if token.pushes(&occ) => 1,
            TagKind::Open => continue,
        };
        match deltas.last_mut() {
            Some((line, total)) if *line == occ.line => *total += delta,
            _ => deltas.push((occ.line, delta)),
        }
    }

    let mut balance = 0i64;
    let mut steps = Vec::new();
    let mut negative_lines = Vec::new();

    let mut pending = deltas.into_iter().peekable();
    for idx in window.indices(lines.len()) {
        let line = idx + 1;
        if let Some((_, delta)) = pending.next_if(|(l, _)| *l == line) {
            balance += delta;
            if delta != 0 {
                steps.push(BalanceStep {
                    line,
                    delta,
                    balance,
                });
            }
        }
        if balance < 0 {
            negative_lines.push(line);
        }
    }

    BalanceTrace {
        token: token.name().to_string(),
        window,
        steps,
        negative_lines,
        final_balance: balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div() -> TagToken {
        TagToken::new("div").unwrap()
    }

    #[test]
    fn balanced_region_ends_at_zero() {
        let lines = ["<div>", "  <div>x</div>", "</div>"];
        let trace = trace_balance(&lines, Window::new(0, 2), &div());
        assert!(trace.is_balanced());
        assert_eq!(
            trace.steps,
            vec![
                BalanceStep {
                    line: 1,
                    delta: 1,
                    balance: 1
                },
                BalanceStep {
                    line: 3,
                    delta: -1,
                    balance: 0
                },
            ]
        );
    }

    #[test]
    fn stray_close_goes_negative_until_recovered() {
        let lines = ["</div>", "text", "<div>", "<div>"];
        let trace = trace_balance(&lines, Window::new(0, 3), &div());
        assert_eq!(trace.negative_lines, vec![1, 2]);
        assert_eq!(trace.final_balance, 1);
        assert!(!trace.is_balanced());
    }

    #[test]
    fn self_closing_tags_do_not_move_the_balance() {
        let lines = ["<div />", "<div", "  className=\"x\"", "/>"];
        let trace = trace_balance(&lines, Window::new(0, 3), &div());
        assert!(trace.steps.is_empty());
        assert_eq!(trace.final_balance, 0);
    }

    #[test]
    fn unclosed_open_leaves_positive_balance() {
        let lines = ["<div>", "<div>", "</div>"];
        let trace = trace_balance(&lines, Window::new(0, 2), &div());
        assert_eq!(trace.final_balance, 1);
        assert!(trace.negative_lines.is_empty());
    }
}
