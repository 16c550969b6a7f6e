use crate::front_matter::parser::{parse_mapping, split_front_matter, DELIMITER};
use crate::utils::error::MigrateError;
use crate::utils::text::{quote_scalar, strip_quotes, truncate_with_ellipsis};

/// Keys whose values are re-quoted
const QUOTED_KEYS: [&str; 2] = ["title", "description"];

/// Recover the text of a possibly broken scalar value
fn decode_value(raw: &str) -> String {
    let raw = raw.trim();
    let looks_quoted = raw.starts_with('"') || raw.starts_with('\'');
    if looks_quoted {
        if let Ok(decoded) = serde_yaml::from_str::<String>(raw) {
            return decoded;
        }
    }
    raw.to_string()
}

/// Repair the `title` and `description` lines of a header; every other line passes through.
pub fn repair_header(header: &str, description_max_chars: usize) -> String {
    let mut repaired = String::with_capacity(header.len());

    for line in header.lines() {
        let top_level = !line.starts_with(char::is_whitespace);
        match line.split_once(':') {
            Some((key, value)) if top_level && QUOTED_KEYS.contains(&key.trim()) => {
                let key = key.trim();
                let mut text = strip_quotes(&decode_value(value));
                if key == "description" {
                    text = truncate_with_ellipsis(&text, description_max_chars);
                }
                repaired.push_str(&format!("{}: {}", key, quote_scalar(&text)));
            }
            _ => repaired.push_str(line),
        }
        repaired.push('\n');
    }

    repaired
}

/// Repair a whole document. The body is kept byte-for-byte.
///
/// Fails without producing output when the document has no delimited header, or when
/// the header is still not valid YAML after repair.
pub fn repair_document(content: &str, description_max_chars: usize) -> Result<String, MigrateError> {
    let (header, body) = split_front_matter(content).ok_or_else(|| {
        MigrateError::FrontMatter("no delimited header block at the top of the file".to_string())
    })?;

    let repaired = repair_header(header, description_max_chars);
    parse_mapping(&repaired)?;

    Ok(format!("{d}\n{}{d}\n{}", repaired, body, d = DELIMITER))
}
