use std::collections::{BTreeMap, BTreeSet};

/// Built-in tag → keywords table
pub fn builtin_tag_keywords() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("ai", vec!["AI", "ai", "大模型", "智能", "人工智能", "LLM"]),
        ("go", vec!["Go", "go", "golang", "Go+", "goplus"]),
        ("compiler", vec!["编译器", "XGo", "LLGo", "类型系统", "typesystem", "compiler"]),
        ("engineering", vec!["工程实践", "工程师", "Code Review", "GitHub", "PR", "质量", "规范"]),
        ("architecture", vec!["架构设计", "架构", "设计", "系统", "architecture", "design"]),
        ("xgo", vec!["XGo", "xgo"]),
        ("llgo", vec!["LLGo", "llgo", "llpyg"]),
        ("career", vec!["职业", "发展", "成长", "特质", "核心竞争力", "career"]),
        ("python", vec!["Python", "python", "llpyg"]),
        ("tutorial", vec!["教程", "指南", "入门", "guide", "tutorial"]),
        ("best-practices", vec!["最佳实践", "实践", "心得", "best-practices"]),
    ]
}

/// Keyword → tag matcher with a fallback tag
#[derive(Debug, Clone)]
pub struct TagTable {
    keywords: BTreeMap<String, Vec<String>>,
    default_tag: String,
}

impl TagTable {
    pub fn new(keywords: BTreeMap<String, Vec<String>>, default_tag: String) -> Self {
        // Matching is case-insensitive, so fold once here
        let keywords = keywords
            .into_iter()
            .map(|(tag, words)| (tag, words.into_iter().map(|w| w.to_lowercase()).collect()))
            .collect();
        TagTable { keywords, default_tag }
    }

    /// Sorted tags whose keywords occur in the title, body or folder name
    pub fn extract(&self, title: &str, body: &str, folder_name: &str) -> Vec<String> {
        let haystack = format!("{} {} {}", title, body, folder_name).to_lowercase();

        let mut tags: BTreeSet<String> = self
            .keywords
            .iter()
            .filter(|(_, words)| words.iter().any(|w| !w.is_empty() && haystack.contains(w.as_str())))
            .map(|(tag, _)| tag.clone())
            .collect();

        if tags.is_empty() {
            tags.insert(self.default_tag.clone());
        }

        tags.into_iter().collect()
    }
}
