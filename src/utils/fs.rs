use std::fs;
use std::path::{Path, PathBuf};
use std::io::{Read, Write};

use crate::utils::error::MigrateError;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<(), MigrateError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        MigrateError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create directory {}: {}", path.display(), e),
        ))
    })
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, MigrateError> {
    let path = path.as_ref();
    let mut contents = String::new();
    fs::File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| {
            MigrateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
    Ok(contents)
}

/// Write a string to a file, creating parent directories if they don't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), MigrateError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::File::create(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .map_err(|e| {
            MigrateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", path.display(), e),
            ))
        })
}

/// Write only when the file is missing or its contents differ. Returns whether it wrote.
pub fn write_if_changed<P: AsRef<Path>>(path: P, contents: &str) -> Result<bool, MigrateError> {
    let path = path.as_ref();
    if path.is_file() && read_file(path)? == contents {
        return Ok(false);
    }
    write_file(path, contents)?;
    Ok(true)
}

/// Copy a file from source to destination, overwriting whatever is there
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64, MigrateError> {
    let (from, to) = (from.as_ref(), to.as_ref());
    if let Some(parent) = to.parent() {
        create_directory(parent)?;
    }

    fs::copy(from, to).map_err(|e| {
        MigrateError::Asset(format!(
            "Failed to copy file from {} to {}: {}",
            from.display(),
            to.display(),
            e
        ))
    })
}

/// List the Markdown files exactly one directory below `root`, sorted by path
pub fn list_article_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, MigrateError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(MigrateError::Config(format!(
            "Source directory does not exist: {}", root.display()
        )));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).min_depth(2).max_depth(2) {
        let entry = entry.map_err(|e| MigrateError::Generic(format!("Failed to scan {}: {}", root.display(), e)))?;
        if entry.file_type().is_file() && crate::utils::path::has_extension(entry.path(), "md") {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
