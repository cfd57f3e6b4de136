//! Escaping for TEXT values and parameter values.

/// Escapes a TEXT value (RFC 5545 §3.3.11).
///
/// A CR is dropped so CRLF and LF both become `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | ',' | ';' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Escapes each element and joins them with `,` for multi-valued TEXT.
#[must_use]
pub fn join_text_list<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_text(item));
    }
    out
}

/// Renders a parameter value, quoting it when it contains `:`, `;` or `,`.
///
/// Inside quotes, `^`, newline and `"` use RFC 6868 caret escapes.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !s.contains([':', ';', ',', '"', '\n']) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '^' => out.push_str("^^"),
            '\n' => out.push_str("^n"),
            '"' => out.push_str("^'"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes() {
        assert_eq!(escape_text(r"C:\tmp; a, b"), r"C:\\tmp\; a\, b");
        assert_eq!(escape_text("one\r\ntwo\nthree"), r"one\ntwo\nthree");
    }

    #[test]
    fn list_joining() {
        let items = vec!["x,y".to_string(), "z".to_string()];
        assert_eq!(join_text_list(&items), r"x\,y,z");
        assert_eq!(join_text_list(&Vec::<String>::new()), "");
    }

    #[test]
    fn param_quoting() {
        assert_eq!(escape_param_value("Plain"), "Plain");
        assert_eq!(escape_param_value("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape_param_value("mailto:a@example.com"), "\"mailto:a@example.com\"");
        assert_eq!(escape_param_value("say \"hi\"\n^"), "\"say ^'hi^'^n^^\"");
    }
}
