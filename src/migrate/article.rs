use std::path::{Path, PathBuf};

use crate::front_matter::split_title_and_body;
use crate::utils::error::MigrateError;
use crate::utils::fs::read_file;

/// One source article: a Markdown file inside its own directory
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub source_path: PathBuf,
    /// Directory searched for the article's images
    pub source_dir: PathBuf,
    /// Name of the article directory, used as a tag hint
    pub folder_name: String,
    pub title: Option<String>,
    /// Content after the title heading
    pub body: String,
    /// Position in the sorted corpus
    pub index: usize,
}

impl Article {
    pub fn from_content(source_path: PathBuf, content: &str, index: usize) -> Self {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let (title, body) = split_title_and_body(content);

        let source_dir = source_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let folder_name = source_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Article {
            source_path,
            source_dir,
            folder_name,
            title,
            body,
            index,
        }
    }

    pub fn load(source_path: &Path, index: usize) -> Result<Self, MigrateError> {
        let content = read_file(source_path)?;
        Ok(Self::from_content(source_path.to_path_buf(), &content, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content() {
        let content = "\u{FEFF}# 编译器入门\n\n正文第一段。\n";
        let article = Article::from_content(PathBuf::from("2025/03-编译器/index.md"), content, 4);

        assert_eq!(article.title.as_deref(), Some("编译器入门"));
        assert!(article.body.contains("正文第一段。"));
        assert!(!article.body.contains("# 编译器入门"));
        assert_eq!(article.folder_name, "03-编译器");
        assert_eq!(article.source_dir, PathBuf::from("2025/03-编译器"));
        assert_eq!(article.index, 4);
    }

    #[test]
    fn test_without_heading() {
        let article = Article::from_content(PathBuf::from("2025/x/a.md"), "just text\n", 0);
        assert_eq!(article.title, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Article::load(&dir.path().join("nope/index.md"), 0).is_err());
    }
}
