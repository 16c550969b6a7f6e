use std::collections::BTreeMap;
use std::path::PathBuf;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::front_matter::tags::{self, TagTable};
use crate::slug::{tables, OverrideTable, PhraseDictionary, SlugDeriver, SlugStrategy};
use crate::utils::error::MigrateError;

/// Migration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Source tree, one subdirectory per article
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory migrated posts are written to
    #[serde(default = "defaults::default_blog_dir")]
    pub blog_dir: PathBuf,

    /// Root of the per-slug image directories
    #[serde(default = "defaults::default_asset_root")]
    pub asset_root: PathBuf,

    /// URL path `asset_root` is served under
    #[serde(default = "defaults::default_asset_url_prefix")]
    pub asset_url_prefix: String,

    /// Where the JSON migration report is written
    #[serde(default = "defaults::default_report_path")]
    pub report_path: PathBuf,

    /// Prefix for the `slug` header field, e.g. `/blog/2025`. Empty writes the bare slug.
    #[serde(default = "defaults::default_slug_prefix")]
    pub slug_prefix: String,

    /// Date given to the first article, `YYYY-MM-DD`
    #[serde(default = "defaults::default_base_date")]
    pub base_date: String,

    /// Days between consecutive articles
    #[serde(default = "defaults::default_date_step_days")]
    pub date_step_days: i64,

    #[serde(default = "defaults::default_authors")]
    pub authors: Vec<String>,

    /// Tag used when no keyword matches
    #[serde(default = "defaults::default_tag")]
    pub default_tag: String,

    /// Description used when no body line qualifies
    #[serde(default = "defaults::default_description_placeholder")]
    pub description_placeholder: String,

    #[serde(default = "defaults::default_description_max_chars")]
    pub description_max_chars: usize,

    /// Description limit applied by `repair`
    #[serde(default = "defaults::default_repair_description_max_chars")]
    pub repair_description_max_chars: usize,

    /// Extensions treated as images, without the dot
    #[serde(default = "defaults::default_image_extensions")]
    pub image_extensions: Vec<String>,

    #[serde(default = "defaults::default_strategy")]
    pub strategy: SlugStrategy,

    /// Extra dictionary phrases, merged over the built-in table
    #[serde(default)]
    pub dictionary: BTreeMap<String, String>,

    /// Extra title → slug overrides, merged over the built-in table
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,

    /// Extra tag → keywords entries, merged over the built-in table
    #[serde(default)]
    pub tag_keywords: BTreeMap<String, Vec<String>>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig {
            source: defaults::default_source(),
            blog_dir: defaults::default_blog_dir(),
            asset_root: defaults::default_asset_root(),
            asset_url_prefix: defaults::default_asset_url_prefix(),
            report_path: defaults::default_report_path(),
            slug_prefix: defaults::default_slug_prefix(),
            base_date: defaults::default_base_date(),
            date_step_days: defaults::default_date_step_days(),
            authors: defaults::default_authors(),
            default_tag: defaults::default_tag(),
            description_placeholder: defaults::default_description_placeholder(),
            description_max_chars: defaults::default_description_max_chars(),
            repair_description_max_chars: defaults::default_repair_description_max_chars(),
            image_extensions: defaults::default_image_extensions(),
            strategy: defaults::default_strategy(),
            dictionary: BTreeMap::new(),
            overrides: BTreeMap::new(),
            tag_keywords: BTreeMap::new(),
        }
    }
}

impl MigrationConfig {
    /// Parse the anchor date
    pub fn base_date(&self) -> Result<NaiveDate, MigrateError> {
        NaiveDate::parse_from_str(&self.base_date, "%Y-%m-%d").map_err(|e| {
            MigrateError::Config(format!("base_date `{}` is not YYYY-MM-DD: {}", self.base_date, e))
        })
    }

    /// Build the slug deriver from the built-in tables plus configured extras
    pub fn slug_deriver(&self) -> SlugDeriver {
        let dictionary = PhraseDictionary::from_pairs(
            tables::builtin_dictionary()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .chain(self.dictionary.clone()),
        );
        let overrides = OverrideTable::from_pairs(
            tables::builtin_overrides()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .chain(self.overrides.clone()),
        );

        log::debug!(
            "Slug tables: {} dictionary phrases, {} overrides, strategy {}",
            dictionary.len(),
            overrides.len(),
            self.strategy
        );

        SlugDeriver::new(self.strategy, dictionary, overrides)
    }

    /// Build the tag table from the built-in keywords plus configured extras
    pub fn tag_table(&self) -> TagTable {
        let mut table: BTreeMap<String, Vec<String>> = tags::builtin_tag_keywords()
            .into_iter()
            .map(|(tag, keywords)| (tag.to_string(), keywords.iter().map(|k| k.to_string()).collect()))
            .collect();
        for (tag, keywords) in &self.tag_keywords {
            table.insert(tag.clone(), keywords.clone());
        }

        TagTable::new(table, self.default_tag.clone())
    }
}
