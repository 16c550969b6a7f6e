use std::path::PathBuf;

use crate::slug::SlugStrategy;

/// Default source tree: one subdirectory per article
pub fn default_source() -> PathBuf {
    PathBuf::from("2025")
}

/// Default directory migrated posts are written to
pub fn default_blog_dir() -> PathBuf {
    PathBuf::from("website/blog")
}

/// Default root that per-slug image directories are created under
pub fn default_asset_root() -> PathBuf {
    PathBuf::from("website/static/img/blog")
}

/// URL path under which `asset_root` is served
pub fn default_asset_url_prefix() -> String {
    "/img/blog".to_string()
}

pub fn default_report_path() -> PathBuf {
    PathBuf::from("slug_mapping.json")
}

/// Prefix written in front of the slug in the `slug` header field
pub fn default_slug_prefix() -> String {
    "/blog/2025".to_string()
}

pub fn default_base_date() -> String {
    "2025-01-15".to_string()
}

pub fn default_date_step_days() -> i64 {
    2
}

pub fn default_authors() -> Vec<String> {
    vec!["techcamp".to_string()]
}

/// Tag assigned when no keyword matches
pub fn default_tag() -> String {
    "engineering".to_string()
}

pub fn default_description_placeholder() -> String {
    "1024 实训营技术分享文章".to_string()
}

pub fn default_description_max_chars() -> usize {
    150
}

pub fn default_repair_description_max_chars() -> usize {
    120
}

pub fn default_image_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "svg", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn default_strategy() -> SlugStrategy {
    SlugStrategy::Dictionary
}
