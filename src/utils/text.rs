/// Quote characters that are stripped from quoted header values.
/// Covers ASCII quotes plus the full-width and typographic variants.
pub const QUOTE_CHARS: [char; 8] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{FF02}', '\u{FF07}'];

const ELLIPSIS: &str = "...";

/// Remove every quote character from `text`
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
}

/// Truncate to at most `max_chars` characters, ending in `...` when anything was cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Render `value` as a double-quoted YAML scalar with quote characters stripped
pub fn quote_scalar(value: &str) -> String {
    let cleaned = strip_quotes(value);
    let mut quoted = String::with_capacity(cleaned.len() + 2);
    quoted.push('"');
    for c in cleaned.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' | '\r' => quoted.push(' '),
            c if c.is_control() => quoted.push_str(&format!("\\x{:02X}", c as u32)),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Character count, the unit used for every length limit
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        let line: String = "字".repeat(200);
        let desc = truncate_with_ellipsis(&line, 150);
        assert_eq!(char_len(&desc), 150);
        assert!(desc.ends_with("..."));
        assert_eq!(desc.chars().filter(|c| *c == '字').count(), 147);

        let short = "a".repeat(140);
        assert_eq!(truncate_with_ellipsis(&short, 150), short);

        let exact = "b".repeat(150);
        assert_eq!(truncate_with_ellipsis(&exact, 150), exact);
    }

    #[test]
    fn test_truncate_is_stable() {
        let once = truncate_with_ellipsis(&"c".repeat(300), 120);
        assert_eq!(truncate_with_ellipsis(&once, 120), once);
    }

    #[test]
    fn test_quote_scalar_strips_and_escapes() {
        assert_eq!(quote_scalar("如何才算\u{201C}完成\u{201D}一个AI应用"), "\"如何才算完成一个AI应用\"");
        assert_eq!(quote_scalar("say \"hi\""), "\"say hi\"");
        assert_eq!(quote_scalar(r"C:\path"), r#""C:\\path""#);

        let parsed: String = serde_yaml::from_str(&quote_scalar(r"a\b: c")).unwrap();
        assert_eq!(parsed, r"a\b: c");
    }

    #[test]
    fn test_quote_scalar_escapes_control_characters() {
        for raw in ["a\u{1b}[31mb", "a\u{7}b", "x\u{7f}y\u{85}z"] {
            let quoted = quote_scalar(raw);
            assert!(!quoted.chars().any(|c| c.is_control()), "{:?}", quoted);
            let parsed: String = serde_yaml::from_str(&quoted).unwrap();
            assert_eq!(parsed, raw);
        }
        assert_eq!(quote_scalar("a\u{1b}b"), "\"a\\x1Bb\"");
    }
}
