//! Batch operations over a corpus or an already-migrated blog directory.
//!
//! Every operation returns a [`MigrationResult`]: the files it touched, the warnings it
//! logged and a per-kind count of non-fatal failures. Fatal errors come back as `Err`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;

use crate::utils::error::{FailureKind, MigrateError};
use crate::utils::path::split_date_prefix;

mod article;
mod images;
mod pipeline;
mod repair;
pub mod report;
mod reslug;

pub use article::Article;
pub use images::relocate_post_images;
pub use pipeline::Pipeline;
pub use repair::repair_posts;
pub use report::ReportEntry;
pub use reslug::reslug_posts;

// Everything a run did and everything it skipped
#[derive(Debug, Default)]
pub struct MigrationResult {
    pub entries: Vec<ReportEntry>,
    pub changes: Vec<MigrationChange>,
    pub warnings: Vec<String>,
    pub failures: BTreeMap<FailureKind, usize>,
}

// Individual file touched by a run
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationChange {
    pub file_path: String,
    pub change_type: ChangeType,
    pub description: String,
}

// Types of changes that can occur during migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeType {
    Created,
    Modified,
    Converted,
    Copied,
    Renamed,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Created => write!(f, "Created"),
            ChangeType::Modified => write!(f, "Modified"),
            ChangeType::Converted => write!(f, "Converted"),
            ChangeType::Copied => write!(f, "Copied"),
            ChangeType::Renamed => write!(f, "Renamed"),
        }
    }
}

/// Overall outcome of a run, mapped onto the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Clean,
    ArticleFailures,
    Warnings,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::ArticleFailures => 2,
            RunStatus::Warnings => 3,
        }
    }
}

impl MigrationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_change<P: AsRef<Path>>(&mut self, path: P, change_type: ChangeType, description: impl Into<String>) {
        self.changes.push(MigrationChange {
            file_path: path.as_ref().display().to_string(),
            change_type,
            description: description.into(),
        });
    }

    /// Count a non-fatal failure and log it
    pub fn record_failure(&mut self, kind: FailureKind, message: impl Into<String>) {
        let message = message.into();
        warn!("{}: {}", kind, message);
        self.warnings.push(format!("{}: {}", kind, message));
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    pub fn change_counts(&self) -> BTreeMap<ChangeType, usize> {
        let mut counts = BTreeMap::new();
        for change in &self.changes {
            *counts.entry(change.change_type).or_insert(0) += 1;
        }
        counts
    }

    pub fn status(&self) -> RunStatus {
        if self.failures.keys().any(|kind| kind.is_article_failure()) {
            RunStatus::ArticleFailures
        } else if self.failures.values().any(|count| *count > 0) {
            RunStatus::Warnings
        } else {
            RunStatus::Clean
        }
    }
}

/// Migrated posts (`YYYY-MM-DD-*.md`) directly inside `blog_dir`, sorted by name
pub fn list_dated_posts(blog_dir: &Path) -> Result<Vec<PathBuf>, MigrateError> {
    if !blog_dir.is_dir() {
        return Err(MigrateError::Config(format!(
            "Blog directory does not exist: {}", blog_dir.display()
        )));
    }

    let escaped = glob::Pattern::escape(&blog_dir.to_string_lossy());
    let pattern = format!("{}/*.md", escaped);
    let entries = glob::glob(&pattern)
        .map_err(|e| MigrateError::Generic(format!("Invalid glob pattern {}: {}", pattern, e)))?;

    let mut posts = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MigrateError::Io(e.into_error()))?;
        let dated = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(split_date_prefix)
            .is_some();
        if dated && path.is_file() {
            posts.push(path);
        }
    }

    posts.sort();
    Ok(posts)
}
