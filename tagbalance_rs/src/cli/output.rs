//! Human-readable report rendering.
//!
//! Every renderer returns the full text so nothing reaches stdout until the
//! whole report is built.

use std::path::Path;

use crate::checks::{BalanceTrace, CommentReport, DelimiterCounts, UnclosedReport};
use crate::colors::Painter;
use crate::source::Window;

pub fn render_unclosed(report: &UnclosedReport, path: &Path, p: &Painter) -> String {
    let location = location(path, report.window, p);
    if report.is_balanced() {
        return p.status_ok(&format!(
            "All {} tags are closed in {location}",
            p.tag(&report.token)
        ));
    }

    let mut out = vec![format!(
        "{} {} in {location}:",
        p.header(&format!("{} unclosed", report.unclosed.len())),
        p.tag(&report.token),
    )];
    for tag in &report.unclosed {
        out.push(format!(
            "  line {}:{}  {}",
            p.number(tag.line),
            tag.column,
            p.dim(&tag.text)
        ));
    }
    out.push(p.dim(&format!(
        "  opened {}, closed {}, stray closes {}, self-closing/void {}",
        report.opened, report.closed, report.stray_closes, report.skipped_opens
    )));
    out.join("\n")
}

pub fn render_trace(trace: &BalanceTrace, path: &Path, p: &Painter) -> String {
    let mut out = vec![format!(
        "{} balance in {}",
        p.tag(&trace.token),
        location(path, trace.window, p)
    )];
    for step in &trace.steps {
        let delta = format!("{:+}", step.delta);
        let balance = if step.balance < 0 {
            p.warn(&step.balance.to_string())
        } else {
            step.balance.to_string()
        };
        out.push(format!(
            "  line {:<6} {:>4}  -> {}",
            p.number(step.line),
            delta,
            balance
        ));
    }
    if !trace.negative_lines.is_empty() {
        out.push(p.status_warn(&format!(
            "Balance below zero on lines {}",
            format_line_ranges(&trace.negative_lines)
        )));
    }

    let final_line = format!("Final balance: {}", trace.final_balance);
    out.push(if trace.final_balance == 0 {
        p.status_ok(&final_line)
    } else {
        p.status_error(&final_line)
    });
    out.join("\n")
}

pub fn render_counts(counts: &DelimiterCounts, path: &Path, p: &Painter) -> String {
    let mut out = vec![format!("Delimiters in {}", location(path, counts.window, p))];
    for (label, pair) in counts.pairs() {
        let label = if label == "tags" {
            format!("<{}>", counts.token)
        } else {
            label.to_string()
        };
        let verdict = if pair.is_balanced() {
            p.ok("ok")
        } else {
            let diff = pair.open as i64 - pair.close as i64;
            p.error(&format!("mismatch ({diff:+})"))
        };
        out.push(format!(
            "  {label:<10} {:>6} open {:>6} close  {verdict}",
            pair.open, pair.close
        ));
    }
    out.join("\n")
}

pub fn render_comments(report: &CommentReport, path: &Path, p: &Painter) -> String {
    let location = location(path, report.window, p);
    if report.is_comment_only() {
        return p.status_ok(&format!("Only comments or blank lines in {location}"));
    }

    let mut out = vec![format!(
        "{} in {location}:",
        p.header(&format!("{} code lines", report.code_lines.len()))
    )];
    for code in &report.code_lines {
        out.push(format!("  line {}  {}", p.number(code.line), p.dim(&code.text)));
    }
    out.join("\n")
}

/// Collapse sorted line numbers into `1-3, 7, 9-10`.
pub fn format_line_ranges(lines: &[usize]) -> String {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &line in lines {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == line => *end = line,
            _ => ranges.push((line, line)),
        }
    }
    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn location(path: &Path, window: Window, p: &Painter) -> String {
    format!("{} (lines {window})", p.path(&path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{count_delimiters, find_code_lines, scan_report, trace_balance};
    use crate::tokens::TagToken;

    fn div() -> TagToken {
        TagToken::new("div").unwrap()
    }

    #[test]
    fn line_ranges_collapse() {
        assert_eq!(format_line_ranges(&[]), "");
        assert_eq!(format_line_ranges(&[4]), "4");
        assert_eq!(format_line_ranges(&[1, 2, 3, 7, 9, 10]), "1-3, 7, 9-10");
    }

    #[test]
    fn unclosed_lists_lines_and_context() {
        let lines = ["<div>", "  <div className=\"x\">", "  </div>", ""];
        let report = scan_report(&lines, Window::new(0, 3), &div());
        let text = render_unclosed(&report, Path::new("App.tsx"), &Painter::plain());

        assert!(text.starts_with("1 unclosed <div> in App.tsx (lines 1-4):"));
        assert!(text.contains("  line 1:1  <div>"));
        assert!(text.contains("opened 2, closed 1"));
    }

    #[test]
    fn balanced_unclosed_confirms() {
        let lines = ["<div>", "</div>"];
        let report = scan_report(&lines, Window::new(0, 1), &div());
        let text = render_unclosed(&report, Path::new("App.tsx"), &Painter::plain());
        assert_eq!(text, "[OK] All <div> tags are closed in App.tsx (lines 1-2)");
    }

    #[test]
    fn trace_warns_on_negative_balance() {
        let lines = ["</div>", "", "<div>"];
        let trace = trace_balance(&lines, Window::new(0, 2), &div());
        let text = render_trace(&trace, Path::new("App.tsx"), &Painter::plain());
        assert!(text.contains("[WARN] Balance below zero on lines 1-2"));
        assert!(text.ends_with("[OK] Final balance: 0"));
    }

    #[test]
    fn counts_show_mismatch() {
        let lines = ["{ (", "<div>"];
        let counts = count_delimiters(&lines, Window::new(0, 1), &div());
        let text = render_counts(&counts, Path::new("App.tsx"), &Painter::plain());
        assert!(text.contains("braces"));
        assert!(text.contains("mismatch (+1)"));
        assert!(text.contains("<div>"));
    }

    #[test]
    fn comments_list_code_lines() {
        let lines = ["// a", "return x;"];
        let report = find_code_lines(&lines, Window::new(0, 1));
        let text = render_comments(&report, Path::new("App.tsx"), &Painter::plain());
        assert!(text.contains("1 code lines in App.tsx (lines 1-2):"));
        assert!(text.contains("line 2  return x;"));
    }
}
