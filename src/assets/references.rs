use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref MARKDOWN_IMAGE: Regex =
        Regex::new(r#"!\[(?P<alt>[^\]]*)\]\((?P<path>[^)\s]+)(?P<rest>[^)]*)\)"#).unwrap();
    static ref HTML_IMAGE: Regex =
        Regex::new(r#"(?P<pre><img\b[^>]*?\bsrc\s*=\s*)(?P<q>["'])(?P<path>[^"']+)["']"#).unwrap();
}

/// Every image path referenced from Markdown `![alt](path)` or HTML `<img src>` syntax
pub fn collect_references(body: &str) -> Vec<String> {
    MARKDOWN_IMAGE
        .captures_iter(body)
        .chain(HTML_IMAGE.captures_iter(body))
        .map(|caps| caps["path"].to_string())
        .collect()
}

/// Rewrite image paths. `rewrite` returns the new path, or `None` to keep a reference as written.
pub fn rewrite_references<F>(body: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let body = MARKDOWN_IMAGE.replace_all(body, |caps: &Captures| match rewrite(&caps["path"]) {
        Some(new_path) => format!("![{}]({}{})", &caps["alt"], new_path, &caps["rest"]),
        None => caps[0].to_string(),
    });

    HTML_IMAGE
        .replace_all(&body, |caps: &Captures| match rewrite(&caps["path"]) {
            Some(new_path) => format!("{}{q}{}{q}", &caps["pre"], new_path, q = &caps["q"]),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Whether a reference points off-site or is inline data
pub fn is_remote(path: &str) -> bool {
    path.contains("://") || path.starts_with("//") || path.starts_with("data:") || path.starts_with('#')
}

/// The file name a reference names, without query string, fragment or percent-encoding
pub fn referenced_file_name(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = path.trim_start_matches('<').trim_end_matches('>');
    let last = path.rsplit('/').next().filter(|s| !s.is_empty())?;
    let decoded = urlencoding::decode(last)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| last.to_string());
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_references() {
        let body = "![架构图](images/arch.png \"title\")\ntext ![](./cover.jpg)\n<img alt=\"x\" src='diagram.svg' width=\"300\">\n[not an image](doc.md)\n";
        assert_eq!(collect_references(body), vec!["images/arch.png", "./cover.jpg", "diagram.svg"]);
    }

    #[test]
    fn test_rewrite_keeps_alt_and_title() {
        let body = "![架构图](images/arch.png \"title\") and <img src=\"a.png\">";
        let out = rewrite_references(body, |p| Some(format!("/new/{}", p)));
        assert_eq!(out, "![架构图](/new/images/arch.png \"title\") and <img src=\"/new/a.png\">");
    }

    #[test]
    fn test_rewrite_none_leaves_text() {
        let body = "![x](https://example.com/a.png)\n";
        assert_eq!(rewrite_references(body, |_| None), body);
    }

    #[test]
    fn test_referenced_file_name() {
        assert_eq!(referenced_file_name("images/my%20shot.png?v=2").as_deref(), Some("my shot.png"));
        assert_eq!(referenced_file_name("a.png#frag").as_deref(), Some("a.png"));
        assert_eq!(referenced_file_name("dir/").as_deref(), None);
        assert!(is_remote("https://cdn.example.com/a.png"));
        assert!(is_remote("data:image/png;base64,AAAA"));
        assert!(!is_remote("../images/a.png"));
    }
}
