//! Tag occurrence extraction.
//!
//! Finds every OPEN (`<div ...>`) and CLOSE (`</div>`) occurrence of one tag
//! name inside a window, in line order and left to right within a line.
//! Line comments are stripped first, one line at a time.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::source::Window;

/// Marker that starts a line comment in JS/TS/JSX sources.
pub const LINE_COMMENT: &str = "//";

/// Tags that never take a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static TAG_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Plain tags, JSX members (`Motion.div`) and namespaced tags (`svg:rect`)
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$.:-]*$").unwrap()
});

/// A validated tag name plus its compiled occurrence pattern.
#[derive(Debug, Clone)]
pub struct TagToken {
    name: String,
    pattern: Regex,
    void: bool,
}

impl TagToken {
    pub fn new(name: &str) -> Result<Self> {
        if !TAG_NAME_REGEX.is_match(name) {
            return Err(Error::InvalidToken(name.to_string()));
        }
        // `<div` must be followed by a delimiter so `<divider>` is not a div;
        // a CLOSE must end with `>` on the same line.
        let escaped = regex::escape(name);
        let pattern = Regex::new(&format!(r"<(?:(/){escaped}\s*>|{escaped}(?:[\s/>]|$))"))
            .map_err(|_| Error::InvalidToken(name.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            pattern,
            void: VOID_ELEMENTS.contains(&name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_void(&self) -> bool {
        self.void
    }

    /// True when `occ` must be pushed on the open stack.
    pub fn pushes(&self, occ: &TagOccurrence) -> bool {
        occ.kind == TagKind::Open && !occ.self_closing && !self.void
    }
}

impl std::fmt::Display for TagToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagOccurrence {
    pub kind: TagKind,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
    /// Only meaningful for OPEN occurrences
    pub self_closing: bool,
}

/// Cut everything from the first line-comment marker onwards.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find(LINE_COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Collect the occurrences of `token` in `window`, in source order.
pub fn occurrences<S: AsRef<str>>(
    lines: &[S],
    window: Window,
    token: &TagToken,
) -> Vec<TagOccurrence> {
    let range = window.indices(lines.len());
    let stripped: Vec<&str> = lines[range.clone()]
        .iter()
        .map(|line| strip_line_comment(line.as_ref()))
        .collect();
    // Lines shortened by comment stripping
    let cut: Vec<bool> = lines[range.clone()]
        .iter()
        .zip(&stripped)
        .map(|(line, text)| text.len() < line.as_ref().len())
        .collect();

    let mut found = Vec::new();
    for (offset, text) in stripped.iter().enumerate() {
        let raw = lines[range.start + offset].as_ref();

        for caps in token.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let column = raw[..whole.start()].chars().count() + 1;
            let line = range.start + offset + 1;

            if caps.get(1).is_some() {
                found.push(TagOccurrence {
                    kind: TagKind::Close,
                    line,
                    column,
                    self_closing: false,
                });
                continue;
            }

            let after_name = whole.start() + 1 + token.name.len();
            let self_closing =
                find_tag_end(&stripped[offset..], &cut[offset..], after_name).unwrap_or(false);
            found.push(TagOccurrence {
                kind: TagKind::Open,
                line,
                column,
                self_closing,
            });
        }
    }
    found
}

/// Locate the `>` that ends an opening tag and report whether it was `/>`.
///
/// `rest[0]` is searched from byte `from`; later lines are searched whole.
/// Returns `None` when the tag never ends inside `rest`, or when the search
/// runs off a line that lost a comment tail (quote and brace state past
/// that point is unknown).
fn find_tag_end(rest: &[&str], cut: &[bool], from: usize) -> Option<bool> {
    let mut state = TagEnd::default();
    for (idx, (line, was_cut)) in rest.iter().zip(cut).enumerate() {
        let text = if idx == 0 {
            line.get(from..).unwrap_or("")
        } else {
            *line
        };
        if let Some(self_closing) = state.feed(text) {
            return Some(self_closing);
        }
        if *was_cut {
            return None;
        }
    }
    None
}

/// Carries attribute-parsing state across lines of a multi-line tag.
#[derive(Debug, Default)]
struct TagEnd {
    /// `{...}` expression nesting
    depth: usize,
    quote: Option<char>,
    /// Last non-whitespace char seen at depth 0
    last: Option<char>,
}

impl TagEnd {
    fn feed(&mut self, text: &str) -> Option<bool> {
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if let Some(quote) = self.quote {
                if ch == '\\' {
                    chars.next();
                } else if ch == quote {
                    self.quote = None;
                    if self.depth == 0 {
                        self.last = Some(ch);
                    }
                }
                continue;
            }

            match ch {
                '"' | '\'' | '`' => self.quote = Some(ch),
                '{' => self.depth += 1,
                '}' => self.depth = self.depth.saturating_sub(1),
                '>' if self.depth == 0 => return Some(self.last == Some('/')),
                _ => {}
            }
            if self.depth == 0 && !ch.is_whitespace() {
                self.last = Some(ch);
            }
        }
        None
    }
}
