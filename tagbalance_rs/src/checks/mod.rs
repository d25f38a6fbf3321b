//! Line-window diagnostics.
//!
//! - [`unclosed`] - open-stack scan for unmatched tags
//! - [`balance`] - running open/close balance per line
//! - [`delimiters`] - brace/paren/bracket/tag counters
//! - [`comments`] - comment-only region check

pub mod balance;
pub mod comments;
pub mod delimiters;
pub mod unclosed;

pub use balance::{BalanceStep, BalanceTrace, trace_balance};
pub use comments::{CodeLine, CommentReport, find_code_lines};
pub use delimiters::{DelimiterCounts, PairCount, count_delimiters};
pub use unclosed::{UnclosedReport, UnclosedTag, scan, scan_report};
