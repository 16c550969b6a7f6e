use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_yaml::Value;

use crate::config::MigrationConfig;
use crate::front_matter::parser::get_str;
use crate::front_matter::{parse_mapping, render_document, split_front_matter};
use crate::migrate::{list_dated_posts, ChangeType, MigrationResult};
use crate::slug::{derive_simple, Slug, SlugDeriver};
use crate::utils::error::{FailureKind, MigrateError};
use crate::utils::fs::{read_file, write_file, write_if_changed};
use crate::utils::path::{split_date_prefix, url_join};
use crate::utils::text::strip_quotes;

/// English slug for an already-migrated post.
///
/// Looks up the current slug segment, then the unquoted title, in the override table
/// before falling back to simple derivation from the segment.
pub fn resolve_english_slug(current: &str, title: &str, deriver: &SlugDeriver) -> String {
    let overrides = deriver.overrides();
    if let Some(slug) = overrides.get(current) {
        return slug.to_string();
    }

    let title = strip_quotes(title);
    if let Some(slug) = overrides.get(title.trim()) {
        return slug.to_string();
    }

    derive_simple(current)
}

/// Re-key every dated post in the blog directory to an English slug
pub fn reslug_posts(config: &MigrationConfig) -> Result<MigrationResult, MigrateError> {
    let deriver = config.slug_deriver();
    let posts = list_dated_posts(&config.blog_dir)?;
    info!("Re-slugging {} post(s) in {}", posts.len(), config.blog_dir.display());

    let mut result = MigrationResult::new();
    let mut claimed: HashMap<Slug, PathBuf> = HashMap::new();

    for post in &posts {
        reslug_post(post, config, &deriver, &mut claimed, &mut result)?;
    }

    Ok(result)
}

fn reslug_post(
    path: &Path,
    config: &MigrationConfig,
    deriver: &SlugDeriver,
    claimed: &mut HashMap<Slug, PathBuf>,
    result: &mut MigrationResult,
) -> Result<(), MigrateError> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let (date, file_slug) = match split_date_prefix(stem) {
        Some(parts) => parts,
        None => return Ok(()),
    };

    let content = read_file(path)?;
    let (header, body) = match split_front_matter(&content) {
        Some(parts) => parts,
        None => {
            result.record_failure(FailureKind::MalformedHeader, format!("{} has no header block", path.display()));
            return Ok(());
        }
    };
    let mut mapping = match parse_mapping(header) {
        Ok(mapping) => mapping,
        Err(e) => {
            result.record_failure(FailureKind::MalformedHeader, format!("{}: {}", path.display(), e));
            return Ok(());
        }
    };

    let current = get_str(&mapping, "slug")
        .and_then(|s| s.trim_end_matches('/').rsplit('/').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(file_slug)
        .to_string();
    let title = get_str(&mapping, "title").unwrap_or_default().to_string();

    let slug = match Slug::new(resolve_english_slug(&current, &title, deriver)) {
        Ok(slug) => slug,
        Err(e) => {
            result.record_failure(FailureKind::DegenerateSlug, format!("{}: {}", path.display(), e));
            return Ok(());
        }
    };

    if let Some(owner) = claimed.get(&slug) {
        result.record_failure(
            FailureKind::SlugCollision,
            format!("{} maps to `{}`, already used by {}", path.display(), slug, owner.display()),
        );
        return Ok(());
    }

    let new_path = path.with_file_name(format!("{}-{}.md", date, slug));
    if new_path != path && new_path.exists() {
        result.record_failure(
            FailureKind::SlugCollision,
            format!("{} maps to `{}` but {} already exists", path.display(), slug, new_path.display()),
        );
        return Ok(());
    }
    claimed.insert(slug.clone(), path.to_path_buf());

    let slug_field = if config.slug_prefix.trim().is_empty() {
        slug.to_string()
    } else {
        url_join(&config.slug_prefix, &[slug.as_str()])
    };
    mapping.insert(Value::from("slug"), Value::from(slug_field));
    let rendered = render_document(&mapping, body)?;

    if new_path != path {
        write_file(&new_path, &rendered)?;
        fs::remove_file(path)?;
        info!("{} -> {}", current, slug);
        result.record_change(&new_path, ChangeType::Renamed, format!("from {}", path.display()));
    } else if write_if_changed(path, &rendered)? {
        result.record_change(path, ChangeType::Modified, "slug field updated");
    } else {
        debug!("{} already up to date", path.display());
    }

    Ok(())
}
