use serde::{Deserialize, Serialize};
use lazy_static::lazy_static;
use regex::Regex;

use crate::front_matter::parser::DELIMITER;
use crate::utils::text::quote_scalar;

lazy_static! {
    static ref PLAIN_SCALAR: Regex = Regex::new(r"^[A-Za-z0-9_/][A-Za-z0-9_./-]*$").unwrap();
}

/// Front matter written at the top of every migrated post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// URL slug, possibly path-like (`/blog/2025/<slug>`)
    pub slug: String,

    /// Original-language title
    pub title: String,

    pub authors: Vec<String>,

    /// Sorted, never empty
    pub tags: Vec<String>,

    /// Publication date as `YYYY-MM-DD`
    pub date: String,

    pub description: String,
}

impl FrontMatter {
    /// Render the header lines, without delimiters
    pub fn render(&self) -> String {
        format!(
            "slug: {}\ntitle: {}\nauthors: {}\ntags: {}\ndate: {}\ndescription: {}\n",
            scalar(&self.slug),
            quote_scalar(&self.title),
            flow_list(&self.authors),
            flow_list(&self.tags),
            scalar(&self.date),
            quote_scalar(&self.description),
        )
    }

    /// Render the full post: delimited header, blank line, body
    pub fn to_document(&self, body: &str) -> String {
        format!("{d}\n{}{d}\n\n{}", self.render(), body, d = DELIMITER)
    }
}

/// Plain when the value reads back as the same string, quoted otherwise (`null`, `true`, `123`)
fn scalar(value: &str) -> String {
    let reads_back = matches!(
        serde_yaml::from_str::<serde_yaml::Value>(value),
        Ok(serde_yaml::Value::String(ref parsed)) if parsed == value
    );
    if PLAIN_SCALAR.is_match(value) && reads_back {
        value.to_string()
    } else {
        quote_scalar(value)
    }
}

fn flow_list(items: &[String]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| scalar(item)).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrontMatter {
        FrontMatter {
            slug: "/blog/2025/what-makes-ai-application-complete".to_string(),
            title: "如何才算\"完成\"一个AI应用".to_string(),
            authors: vec!["techcamp".to_string()],
            tags: vec!["ai".to_string(), "best-practices".to_string()],
            date: "2025-01-15".to_string(),
            description: "很多人以为：模型能跑通 demo 就算完成了，其实不然".to_string(),
        }
    }

    #[test]
    fn test_render_layout() {
        let rendered = sample().render();
        assert_eq!(
            rendered,
            "slug: /blog/2025/what-makes-ai-application-complete\n\
             title: \"如何才算完成一个AI应用\"\n\
             authors: [techcamp]\n\
             tags: [ai, best-practices]\n\
             date: 2025-01-15\n\
             description: \"很多人以为：模型能跑通 demo 就算完成了，其实不然\"\n"
        );
    }

    #[test]
    fn test_rendered_header_parses_back() {
        let parsed: FrontMatter = serde_yaml::from_str(&sample().render()).unwrap();
        assert_eq!(parsed.title, "如何才算完成一个AI应用");
        assert_eq!(parsed.tags, vec!["ai", "best-practices"]);
        assert_eq!(parsed.date, "2025-01-15");
        assert!(parsed.description.contains("demo"));
    }

    #[test]
    fn test_odd_list_items_are_quoted() {
        let mut fm = sample();
        fm.authors = vec!["Jane Doe: editor".to_string()];
        let parsed: FrontMatter = serde_yaml::from_str(&fm.render()).unwrap();
        assert_eq!(parsed.authors, vec!["Jane Doe: editor"]);
    }

    #[test]
    fn test_core_literals_stay_strings() {
        let mut fm = sample();
        fm.authors = vec!["null".to_string(), "123".to_string()];
        fm.tags = vec!["true".to_string(), "rust".to_string()];

        let rendered = fm.render();
        assert!(rendered.contains("authors: [\"null\", \"123\"]\n"));
        assert!(rendered.contains("tags: [\"true\", rust]\n"));
        assert!(rendered.contains("date: 2025-01-15\n"));

        let parsed: FrontMatter = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(parsed.authors, fm.authors);
        assert_eq!(parsed.tags, fm.tags);
        assert_eq!(parsed.date, fm.date);
    }

    #[test]
    fn test_control_characters_keep_header_valid() {
        let mut fm = sample();
        fm.title = "a\u{7}b".to_string();
        fm.description = crate::front_matter::extractor::extract_description(
            "运行命令后终端会输出 \u{1b}[31mERROR\u{1b}[0m 这样的彩色提示信息，需要注意。\n",
            150,
            "p",
        );

        let parsed: FrontMatter = serde_yaml::from_str(&fm.render()).unwrap();
        assert_eq!(parsed.title, "a\u{7}b");
        assert!(parsed.description.contains("\u{1b}[31mERROR"));
    }

    #[test]
    fn test_to_document() {
        let doc = sample().to_document("Body text\n");
        assert!(doc.starts_with("---\nslug: "));
        assert!(doc.ends_with("---\n\nBody text\n"));
    }
}
