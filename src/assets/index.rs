use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::error::MigrateError;
use crate::utils::path::{get_file_name, has_any_extension};

/// Image files available to an article, keyed by file name.
///
/// When two files share a name, the shallower one wins, then the one earlier in path order.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    files: BTreeMap<String, PathBuf>,
}

impl AssetIndex {
    /// Index images in `dir` and its immediate subdirectories
    pub fn discover(dir: &Path, extensions: &[String]) -> Result<Self, MigrateError> {
        Self::discover_many(std::iter::once(dir), extensions)
    }

    /// Index images across several article directories, earlier directories first
    pub fn discover_many<'a, I>(dirs: I, extensions: &[String]) -> Result<Self, MigrateError>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut index = AssetIndex::default();

        for dir in dirs {
            if !dir.is_dir() {
                continue;
            }

            let mut found: Vec<(usize, PathBuf)> = Vec::new();
            for entry in WalkDir::new(dir).min_depth(1).max_depth(2) {
                let entry = entry.map_err(|e| {
                    MigrateError::Asset(format!("Failed to scan {}: {}", dir.display(), e))
                })?;
                if entry.file_type().is_file() && has_any_extension(entry.path(), extensions) {
                    found.push((entry.depth(), entry.into_path()));
                }
            }
            found.sort();

            for (_, path) in found {
                if let Some(name) = get_file_name(&path) {
                    index.files.entry(name).or_insert(path);
                }
            }
        }

        Ok(index)
    }

    pub fn get(&self, file_name: &str) -> Option<&Path> {
        self.files.get(file_name).map(|p| p.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
