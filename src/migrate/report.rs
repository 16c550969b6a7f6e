use std::collections::BTreeMap;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::migrate::MigrationResult;
use crate::utils::error::MigrateError;
use crate::utils::fs::write_file;

/// One migrated article in the slug mapping report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub source: String,
    pub destination: String,
    pub original_title: String,
    pub slug: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// Write the report as a pretty-printed JSON array, in migration order
pub fn write_report(entries: &[ReportEntry], path: &Path) -> Result<(), MigrateError> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| MigrateError::Report(format!("Failed to serialize report: {}", e)))?;
    write_file(path, &format!("{}\n", json))
}

/// Tag usage counts, most used first, ties by name
pub fn tag_distribution(entries: &[ReportEntry]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in entries.iter().flat_map(|e| e.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

/// Log the end-of-run summary
pub fn log_summary(result: &MigrationResult) {
    if !result.entries.is_empty() {
        info!("Migrated {} article(s):", result.entries.len());
        for entry in &result.entries {
            info!("  {} -> {} ({})", entry.original_title, entry.slug, entry.date);
        }

        info!("Tag distribution:");
        for (tag, count) in tag_distribution(&result.entries) {
            info!("  {}: {}", tag, count);
        }
    }

    for (change_type, count) in result.change_counts() {
        info!("{}: {} file(s)", change_type, count);
    }

    if result.failures.is_empty() {
        info!("No failures");
    } else {
        for (kind, count) in &result.failures {
            info!("{}: {}", kind, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, tags: &[&str]) -> ReportEntry {
        ReportEntry {
            source: format!("2025/{}/index.md", slug),
            destination: format!("website/blog/2025-01-15-{}.md", slug),
            original_title: slug.to_string(),
            slug: slug.to_string(),
            date: "2025-01-15".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_tag_distribution_order() {
        let entries = vec![
            entry("a", &["go", "rust"]),
            entry("b", &["rust"]),
            entry("c", &["ai", "go"]),
        ];
        let distribution = tag_distribution(&entries);
        assert_eq!(
            distribution,
            vec![("go".to_string(), 2), ("rust".to_string(), 2), ("ai".to_string(), 1)]
        );
    }

    #[test]
    fn test_write_report_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/slug_mapping.json");
        let entries = vec![entry("intro", &["engineering"])];

        write_report(&entries, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ReportEntry> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, entries);
        assert!(text.contains("\"original_title\": \"intro\""));
    }
}
