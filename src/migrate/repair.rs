use std::path::Path;

use log::info;

use crate::front_matter::repair_document;
use crate::migrate::{list_dated_posts, ChangeType, MigrationResult};
use crate::utils::error::{FailureKind, MigrateError};
use crate::utils::fs::{read_file, write_if_changed};

/// Repair the title and description lines of every dated post in `blog_dir`.
///
/// Posts whose header cannot be repaired are reported and left untouched.
pub fn repair_posts(blog_dir: &Path, description_max_chars: usize) -> Result<MigrationResult, MigrateError> {
    let posts = list_dated_posts(blog_dir)?;
    info!("Repairing headers of {} post(s) in {}", posts.len(), blog_dir.display());

    let mut result = MigrationResult::new();
    for post in &posts {
        let content = read_file(post)?;
        match repair_document(&content, description_max_chars) {
            Ok(repaired) => {
                if write_if_changed(post, &repaired)? {
                    result.record_change(post, ChangeType::Modified, "header repaired");
                }
            }
            Err(e) => result.record_failure(FailureKind::MalformedHeader, format!("{}: {}", post.display(), e)),
        }
    }

    Ok(result)
}
