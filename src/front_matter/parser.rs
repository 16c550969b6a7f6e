use serde_yaml::{Mapping, Value};

use crate::utils::error::MigrateError;

/// Line that opens and closes the header block
pub const DELIMITER: &str = "---";

/// Split a document into its header text and the body after the closing delimiter.
///
/// The header keeps its trailing newline; the body is returned byte-for-byte.
/// Returns `None` when there is no complete delimited block at the very top.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Decode a header block into an ordered mapping
pub fn parse_mapping(header: &str) -> Result<Mapping, MigrateError> {
    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(MigrateError::FrontMatter("header is not a key/value mapping".to_string())),
        Err(e) => Err(MigrateError::FrontMatter(format!("invalid YAML header: {}", e))),
    }
}

/// Encode a mapping back into a full document in front of `body`
pub fn render_document(mapping: &Mapping, body: &str) -> Result<String, MigrateError> {
    let yaml = serde_yaml::to_string(mapping)
        .map_err(|e| MigrateError::FrontMatter(format!("failed to encode header: {}", e)))?;
    Ok(format!("{d}\n{}{d}\n{}", yaml, body, d = DELIMITER))
}

/// Read a string-valued key from a mapping
pub fn get_str<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a str> {
    mapping.get(key).and_then(|v| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let content = "---\ntitle: Test Page\nslug: test\n---\n\nPage content here\n---\nnot a header\n";
        let (header, body) = split_front_matter(content).unwrap();
        assert_eq!(header, "title: Test Page\nslug: test\n");
        assert_eq!(body, "\nPage content here\n---\nnot a header\n");
    }

    #[test]
    fn test_split_requires_complete_block() {
        assert!(split_front_matter("# Title\n\nbody").is_none());
        assert!(split_front_matter("---\ntitle: open\nbody without close").is_none());
        assert!(split_front_matter(" ---\ntitle: x\n---\n").is_none());
        assert_eq!(split_front_matter("---\n---\nbody"), Some(("", "body")));
    }

    #[test]
    fn test_crlf_documents() {
        let (header, body) = split_front_matter("---\r\ntitle: x\r\n---\r\nbody\r\n").unwrap();
        assert_eq!(header, "title: x\r\n");
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_parse_and_render_keep_key_order() {
        let mapping = parse_mapping("slug: b\ntitle: \"x: y\"\ndate: 2025-01-15\n").unwrap();
        assert_eq!(get_str(&mapping, "title"), Some("x: y"));

        let doc = render_document(&mapping, "\nbody").unwrap();
        let slug_at = doc.find("slug:").unwrap();
        let title_at = doc.find("title:").unwrap();
        assert!(slug_at < title_at);
        assert!(doc.ends_with("---\n\nbody"));
    }

    #[test]
    fn test_parse_rejects_broken_yaml() {
        assert!(parse_mapping("title: \"unterminated\n").is_err());
        assert!(parse_mapping("- a\n- b\n").is_err());
        assert!(parse_mapping("").unwrap().is_empty());
    }
}
