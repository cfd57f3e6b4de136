//! Line folding (RFC 5545 §3.1).

/// Recommended maximum line width in octets, excluding CRLF.
pub const DEFAULT_LINE_OCTETS: usize = 75;

/// Folds `line` so no physical line exceeds `max_octets`, and appends CRLF.
///
/// A fold is CRLF followed by one space, and that space counts toward the
/// width of the continuation line. Folds only fall between characters, so a
/// width smaller than one character still makes progress.
#[must_use]
pub fn fold_line(line: &str, max_octets: usize) -> String {
    let mut out = String::with_capacity(line.len() + 3 * (line.len() / max_octets.max(1)) + 2);
    let mut width = 0;

    for c in line.chars() {
        let len = c.len_utf8();
        if width > 0 && width + len > max_octets {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += len;
    }

    out.push_str("\r\n");
    out
}

/// Terminates a content line with CRLF without folding.
#[must_use]
pub fn unfolded_line(line: &str) -> String {
    format!("{line}\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unfold(text: &str) -> String {
        text.replace("\r\n ", "").replace("\r\n", "")
    }

    #[test]
    fn fold_short_line() {
        assert_eq!(fold_line("SUMMARY:Short", DEFAULT_LINE_OCTETS), "SUMMARY:Short\r\n");
    }

    #[test]
    fn fold_exactly_at_limit() {
        let line = "A".repeat(DEFAULT_LINE_OCTETS);
        assert_eq!(fold_line(&line, DEFAULT_LINE_OCTETS), format!("{line}\r\n"));
    }

    #[test]
    fn fold_long_line() {
        let line = "X".repeat(150);
        let result = fold_line(&line, DEFAULT_LINE_OCTETS);
        assert!(result.contains("\r\n "));
        assert_eq!(unfold(&result), line);
        for segment in result.split("\r\n") {
            assert!(segment.len() <= DEFAULT_LINE_OCTETS);
        }
    }

    #[test]
    fn fold_preserves_utf8() {
        let line = format!("{}日本語", "A".repeat(73));
        let result = fold_line(&line, DEFAULT_LINE_OCTETS);
        assert_eq!(unfold(&result), line);
        assert!(result.starts_with(&format!("{}\r\n ", "A".repeat(73))));
    }

    #[test]
    fn fold_boundary_75_octets() {
        let line = "A".repeat(80);
        let result = fold_line(&line, DEFAULT_LINE_OCTETS);

        let lines: Vec<&str> = result.split("\r\n").filter(|s| !s.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1].len(), 6); // " " + 5 chars
    }

    #[test]
    fn fold_narrow_width() {
        let result = fold_line("SUMMARY:abcdefgh", 8);
        assert_eq!(result, "SUMMARY:\r\n abcdefg\r\n h\r\n");
    }

    #[test]
    fn fold_degenerate_width_still_terminates() {
        let result = fold_line("ab", 0);
        assert_eq!(unfold(&result), "ab");
    }

    #[test]
    fn unfolded_line_appends_crlf() {
        let line = "X".repeat(200);
        assert_eq!(unfolded_line(&line), format!("{line}\r\n"));
    }
}
