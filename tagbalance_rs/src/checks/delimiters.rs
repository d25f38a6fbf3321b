//! Raw delimiter counters over a window.
//!
//! Counts are textual: braces inside strings are counted too. Comments are
//! stripped per line like everywhere else.

use serde::Serialize;

use crate::source::Window;
use crate::tokens::{TagKind, TagToken, occurrences, strip_line_comment};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub open: usize,
    pub close: usize,
}

impl PairCount {
    pub fn is_balanced(&self) -> bool {
        self.open == self.close
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DelimiterCounts {
    pub token: String,
    pub window: Window,
    pub braces: PairCount,
    pub parens: PairCount,
    pub brackets: PairCount,
    /// Pushable OPENs vs CLOSEs of the token
    pub tags: PairCount,
}

impl DelimiterCounts {
    /// Label and counts for every pair, in display order.
    pub fn pairs(&self) -> [(&'static str, PairCount); 4] {
        [
            ("braces", self.braces),
            ("parens", self.parens),
            ("brackets", self.brackets),
            ("tags", self.tags),
        ]
    }

    pub fn is_balanced(&self) -> bool {
        self.pairs().iter().all(|(_, pair)| pair.is_balanced())
    }
}

pub fn count_delimiters<S: AsRef<str>>(
    lines: &[S],
    window: Window,
    token: &TagToken,
) -> DelimiterCounts {
    let mut braces = PairCount::default();
    let mut parens = PairCount::default();
    let mut brackets = PairCount::default();

    for line in &lines[window.indices(lines.len())] {
        for ch in strip_line_comment(line.as_ref()).chars() {
            match ch {
                '{' => braces.open += 1,
                '}' => braces.close += 1,
                '(' => parens.open += 1,
                ')' => parens.close += 1,
                '[' => brackets.open += 1,
                ']' => brackets.close += 1,
                _ => {}
            }
        }
    }

    let mut tags = PairCount::default();
    for occ in occurrences(lines, window, token) {
        match occ.kind {
            TagKind::Close => tags.close += 1,
            TagKind::Open if token.pushes(&occ) => tags.open += 1,
            TagKind::Open => {}
        }
    }

    DelimiterCounts {
        token: token.name().to_string(),
        window,
        braces,
        parens,
        brackets,
        tags,
    }
}
