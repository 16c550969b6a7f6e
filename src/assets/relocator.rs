use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::assets::index::AssetIndex;
use crate::assets::references::{collect_references, is_remote, referenced_file_name, rewrite_references};
use crate::config::MigrationConfig;
use crate::migrate::Article;
use crate::slug::Slug;
use crate::utils::error::MigrateError;
use crate::utils::fs::copy_file;
use crate::utils::path::url_join;

/// Outcome of relocating one article's images
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relocation {
    pub body: String,
    /// Destination paths written
    pub copied: Vec<PathBuf>,
    /// Local references with no matching file
    pub missing: Vec<String>,
}

/// Copies article images under `<asset_root>/<slug>/` and points references at them
#[derive(Debug, Clone)]
pub struct AssetRelocator {
    asset_root: PathBuf,
    url_prefix: String,
    extensions: Vec<String>,
}

impl AssetRelocator {
    pub fn new(asset_root: PathBuf, url_prefix: String, extensions: Vec<String>) -> Self {
        AssetRelocator {
            asset_root,
            url_prefix,
            extensions,
        }
    }

    pub fn from_config(config: &MigrationConfig) -> Self {
        Self::new(
            config.asset_root.clone(),
            config.asset_url_prefix.clone(),
            config.image_extensions.clone(),
        )
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Directory holding the images of `slug`
    pub fn slug_dir(&self, slug: &Slug) -> PathBuf {
        self.asset_root.join(slug.as_str())
    }

    /// Copy every image found next to the article and rewrite the body's references
    pub fn relocate(&self, article: &Article, slug: &Slug, body: &str) -> Result<Relocation, MigrateError> {
        let index = AssetIndex::discover(&article.source_dir, &self.extensions)?;
        debug!("{} image(s) next to {}", index.len(), article.source_path.display());

        let mut copied = Vec::with_capacity(index.len());
        for (name, source) in index.iter() {
            copied.push(self.copy_into(slug, name, source)?);
        }

        let (body, missing) = self.rewrite(body, slug, &index);
        Ok(Relocation { body, copied, missing })
    }

    /// Copy only the images the body references, looked up in a shared index
    pub fn relocate_referenced(&self, slug: &Slug, body: &str, index: &AssetIndex) -> Result<Relocation, MigrateError> {
        let wanted: BTreeSet<String> = collect_references(body)
            .iter()
            .filter(|path| self.is_relocatable(path))
            .filter_map(|path| referenced_file_name(path))
            .collect();

        let mut copied = Vec::new();
        for name in &wanted {
            if let Some(source) = index.get(name) {
                copied.push(self.copy_into(slug, name, source)?);
            }
        }

        let (body, missing) = self.rewrite(body, slug, index);
        Ok(Relocation { body, copied, missing })
    }

    /// Rewrite references whose file is in `index`; returns the new body and the unmatched references
    pub fn rewrite(&self, body: &str, slug: &Slug, index: &AssetIndex) -> (String, Vec<String>) {
        let mut missing = Vec::new();

        let rewritten = rewrite_references(body, |path| {
            if !self.is_relocatable(path) {
                return None;
            }
            match referenced_file_name(path) {
                Some(name) if index.get(&name).is_some() => {
                    Some(url_join(&self.url_prefix, &[slug.as_str(), &name]))
                }
                _ => {
                    missing.push(path.to_string());
                    None
                }
            }
        });

        (rewritten, missing)
    }

    /// Local references not already inside the destination namespace
    fn is_relocatable(&self, path: &str) -> bool {
        let namespace = format!("{}/", self.url_prefix.trim_end_matches('/'));
        !is_remote(path) && !path.starts_with(&namespace)
    }

    fn copy_into(&self, slug: &Slug, name: &str, source: &Path) -> Result<PathBuf, MigrateError> {
        let destination = self.slug_dir(slug).join(name);
        copy_file(source, &destination)?;
        debug!("Copied {} -> {}", source.display(), destination.display());
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;

    fn relocator(root: &Path) -> AssetRelocator {
        AssetRelocator::new(
            root.join("static/img/blog"),
            "/img/blog".to_string(),
            vec!["png".to_string(), "svg".to_string()],
        )
    }

    fn article(root: &Path, body: &str) -> Article {
        let path = root.join("2025/01-intro/index.md");
        write_file(&path, &format!("# Intro\n\n{}", body)).unwrap();
        write_file(root.join("2025/01-intro/cover.png"), "cover-bytes").unwrap();
        write_file(root.join("2025/01-intro/images/arch.svg"), "<svg/>").unwrap();
        write_file(root.join("2025/01-intro/notes.txt"), "not an image").unwrap();
        Article::load(&path, 0).unwrap()
    }

    #[test]
    fn test_relocate_copies_and_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let body = "![cover](cover.png)\n![arch](./images/arch.svg \"Architecture\")\n";
        let article = article(root, body);
        let slug = Slug::new("intro").unwrap();

        let result = relocator(root).relocate(&article, &slug, &article.body).unwrap();

        assert!(result.body.contains("![cover](/img/blog/intro/cover.png)"));
        assert!(result.body.contains("![arch](/img/blog/intro/arch.svg \"Architecture\")"));
        assert!(result.missing.is_empty());
        assert_eq!(result.copied.len(), 2);

        let copied = root.join("static/img/blog/intro/cover.png");
        assert_eq!(std::fs::read_to_string(copied).unwrap(), "cover-bytes");
        assert!(root.join("static/img/blog/intro/arch.svg").is_file());
        assert!(!root.join("static/img/blog/intro/notes.txt").exists());
    }

    #[test]
    fn test_relocate_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let article = article(root, "![c](cover.png) and <img src=\"images/arch.svg\">\n");
        let slug = Slug::new("intro").unwrap();
        let relocator = relocator(root);

        let first = relocator.relocate(&article, &slug, &article.body).unwrap();
        let second = relocator.relocate(&article, &slug, &first.body).unwrap();

        assert_eq!(first.body, second.body);
        assert!(!second.body.contains("/img/blog/intro/img/blog"));
        assert!(second.missing.is_empty());
    }

    #[test]
    fn test_missing_and_remote_references() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let body = "![gone](missing.png)\n![web](https://example.com/x.png)\n";
        let article = article(root, body);
        let slug = Slug::new("intro").unwrap();

        let result = relocator(root).relocate(&article, &slug, &article.body).unwrap();

        assert!(result.body.contains("![gone](missing.png)"));
        assert!(result.body.contains("![web](https://example.com/x.png)"));
        assert_eq!(result.missing, vec!["missing.png".to_string()]);
    }

    #[test]
    fn test_relocate_referenced_copies_only_used_images() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        article(root, "");
        let index = AssetIndex::discover(&root.join("2025/01-intro"), &["png".to_string(), "svg".to_string()]).unwrap();
        let slug = Slug::new("later-post").unwrap();

        let result = relocator(root)
            .relocate_referenced(&slug, "see ![a](arch.svg)\n", &index)
            .unwrap();

        assert_eq!(result.body, "see ![a](/img/blog/later-post/arch.svg)\n");
        assert!(root.join("static/img/blog/later-post/arch.svg").is_file());
        assert!(!root.join("static/img/blog/later-post/cover.png").exists());
    }
}
