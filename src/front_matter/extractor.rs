use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::text::{char_len, strip_quotes, truncate_with_ellipsis};

lazy_static! {
    static ref ORDERED_ITEM: Regex = Regex::new(r"^\d+[.)]\s").unwrap();
}

/// Lines shorter than this never become a description
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Text of a level-1 Markdown heading line, if it is one
fn heading_text(line: &str) -> Option<&str> {
    let title = line.trim_end().strip_prefix("# ")?.trim();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Extract title from the first level-1 heading outside code fences
pub fn extract_title_from_content(content: &str) -> Option<String> {
    let mut in_fence = false;
    for line in content.lines() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            if let Some(title) = heading_text(line) {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// Split raw content into its title and body.
///
/// When the first non-blank line is the heading, the body is everything after it with
/// the directly following blank lines removed. Otherwise the body is the content untouched.
pub fn split_title_and_body(content: &str) -> (Option<String>, String) {
    let title = extract_title_from_content(content);

    let mut offset = 0;
    let mut lines = content.split_inclusive('\n').peekable();
    while let Some(line) = lines.peek() {
        if !line.trim().is_empty() {
            break;
        }
        offset += line.len();
        lines.next();
    }

    match lines.next() {
        Some(line) if heading_text(line).is_some() => {
            offset += line.len();
            for line in lines {
                if !line.trim().is_empty() {
                    break;
                }
                offset += line.len();
            }
            (title, content[offset..].to_string())
        }
        _ => (title, content.to_string()),
    }
}

fn is_list_item(line: &str) -> bool {
    line.starts_with('*') || line.starts_with("- ") || line.starts_with("+ ") || ORDERED_ITEM.is_match(line)
}

/// First prose line of the body, quote-free and at most `max_chars` long
pub fn extract_description(body: &str, max_chars: usize, placeholder: &str) -> String {
    let mut in_fence = false;
    for line in body.lines() {
        let line = line.trim();
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_list_item(line) || line.starts_with("![") {
            continue;
        }

        let cleaned = strip_quotes(line);
        if char_len(&cleaned) > MIN_DESCRIPTION_CHARS {
            return truncate_with_ellipsis(&cleaned, max_chars);
        }
    }

    placeholder.to_string()
}
