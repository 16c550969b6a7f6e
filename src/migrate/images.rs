use std::path::{Path, PathBuf};

use log::info;
use walkdir::WalkDir;

use crate::assets::{AssetIndex, AssetRelocator};
use crate::config::MigrationConfig;
use crate::front_matter::split_front_matter;
use crate::migrate::{list_dated_posts, ChangeType, MigrationResult};
use crate::slug::Slug;
use crate::utils::error::{FailureKind, MigrateError};
use crate::utils::fs::{read_file, write_if_changed};
use crate::utils::path::split_date_prefix;

/// Copy the images referenced by already-migrated posts and rewrite their references.
///
/// Images are looked up by file name across every article directory of the source tree.
pub fn relocate_post_images(config: &MigrationConfig) -> Result<MigrationResult, MigrateError> {
    let relocator = AssetRelocator::from_config(config);
    let article_dirs = list_article_dirs(&config.source)?;
    let index = AssetIndex::discover_many(article_dirs.iter().map(PathBuf::as_path), relocator.extensions())?;
    info!("Indexed {} image(s) under {}", index.len(), config.source.display());

    let mut result = MigrationResult::new();
    for post in list_dated_posts(&config.blog_dir)? {
        relocate_post(&post, &relocator, &index, &mut result)?;
    }

    Ok(result)
}

fn relocate_post(
    path: &Path,
    relocator: &AssetRelocator,
    index: &AssetIndex,
    result: &mut MigrationResult,
) -> Result<(), MigrateError> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let slug = match split_date_prefix(stem).map(|(_, rest)| Slug::new(rest)) {
        Some(Ok(slug)) => slug,
        _ => {
            result.record_failure(
                FailureKind::DegenerateSlug,
                format!("{} is not named <date>-<slug>.md", path.display()),
            );
            return Ok(());
        }
    };

    let content = read_file(path)?;
    let body = split_front_matter(&content)
        .map(|(_, body)| body)
        .unwrap_or(content.as_str());
    let header = &content[..content.len() - body.len()];

    let relocation = relocator.relocate_referenced(&slug, body, index)?;
    for copied in &relocation.copied {
        result.record_change(copied, ChangeType::Copied, format!("image for {}", slug));
    }
    for missing in &relocation.missing {
        result.record_failure(FailureKind::AssetNotFound, format!("{} references {}", path.display(), missing));
    }

    if write_if_changed(path, &format!("{}{}", header, relocation.body))? {
        result.record_change(path, ChangeType::Modified, "image references rewritten");
    }

    Ok(())
}

/// Article directories directly under the source root, in path order
fn list_article_dirs(source: &Path) -> Result<Vec<PathBuf>, MigrateError> {
    if !source.is_dir() {
        return Err(MigrateError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )));
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| MigrateError::Generic(format!("Failed to scan {}: {}", source.display(), e)))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;
    use std::fs;

    fn config(root: &Path) -> MigrationConfig {
        MigrationConfig {
            source: root.join("2025"),
            blog_dir: root.join("blog"),
            asset_root: root.join("static/img/blog"),
            ..MigrationConfig::default()
        }
    }

    #[test]
    fn test_relocates_referenced_images() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(root.join("2025/01-a/images/diagram.png"), "diagram").unwrap();
        write_file(root.join("2025/02-b/unused.png"), "unused").unwrap();
        let post = root.join("blog/2025-01-15-my-post.md");
        write_file(&post, "---\ntitle: \"x\"\n---\n\n![d](images/diagram.png)\n![m](nowhere.png)\n").unwrap();

        let result = relocate_post_images(&config(root)).unwrap();

        let content = fs::read_to_string(&post).unwrap();
        assert_eq!(
            content,
            "---\ntitle: \"x\"\n---\n\n![d](/img/blog/my-post/diagram.png)\n![m](nowhere.png)\n"
        );
        assert!(root.join("static/img/blog/my-post/diagram.png").is_file());
        assert!(!root.join("static/img/blog/my-post/unused.png").exists());
        assert_eq!(result.failure_count(FailureKind::AssetNotFound), 1);

        let again = relocate_post_images(&config(root)).unwrap();
        assert!(again
            .changes
            .iter()
            .all(|c| c.change_type != ChangeType::Modified));
        assert_eq!(fs::read_to_string(&post).unwrap(), content);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        assert!(relocate_post_images(&config(dir.path())).is_err());
    }
}
