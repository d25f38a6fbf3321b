//! Check that a region is only comments and blank lines.
//!
//! Used to confirm a block was fully commented out before deleting it.

use serde::Serialize;

use crate::source::Window;
use crate::tokens::LINE_COMMENT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentReport {
    pub window: Window,
    pub code_lines: Vec<CodeLine>,
}

impl CommentReport {
    pub fn is_comment_only(&self) -> bool {
        self.code_lines.is_empty()
    }
}

pub fn find_code_lines<S: AsRef<str>>(lines: &[S], window: Window) -> CommentReport {
    let range = window.indices(lines.len());
    let code_lines = lines[range.clone()]
        .iter()
        .zip(range)
        .filter_map(|(line, idx)| {
            let text = line.as_ref().trim();
            (!text.is_empty() && !text.starts_with(LINE_COMMENT)).then(|| CodeLine {
                line: idx + 1,
                text: text.to_string(),
            })
        })
        .collect();

    CommentReport { window, code_lines }
}
