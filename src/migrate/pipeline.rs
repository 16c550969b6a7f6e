use std::collections::HashMap;
use std::path::PathBuf;

use log::{debug, info};

use crate::assets::AssetRelocator;
use crate::config::MigrationConfig;
use crate::front_matter::Synthesizer;
use crate::migrate::report::{self, ReportEntry};
use crate::migrate::{Article, ChangeType, MigrationResult};
use crate::slug::{Slug, SlugDeriver};
use crate::utils::error::{FailureKind, MigrateError};
use crate::utils::fs::{create_directory, list_article_files, write_file};

/// Full migration of a source corpus into the blog directory
pub struct Pipeline {
    config: MigrationConfig,
    deriver: SlugDeriver,
    synthesizer: Synthesizer,
    relocator: AssetRelocator,
}

impl Pipeline {
    pub fn new(config: MigrationConfig) -> Result<Self, MigrateError> {
        let deriver = config.slug_deriver();
        let synthesizer = Synthesizer::new(&config)?;
        let relocator = AssetRelocator::from_config(&config);

        Ok(Pipeline {
            config,
            deriver,
            synthesizer,
            relocator,
        })
    }

    /// Migrate every article, write the report and log the summary
    pub fn run(&self) -> Result<MigrationResult, MigrateError> {
        let files = list_article_files(&self.config.source)?;
        info!("Found {} article(s) under {}", files.len(), self.config.source.display());

        create_directory(&self.config.blog_dir)?;

        let mut result = MigrationResult::new();
        let mut claimed: HashMap<Slug, PathBuf> = HashMap::new();

        for (index, path) in files.iter().enumerate() {
            info!("[{}/{}] {}", index + 1, files.len(), path.display());
            let article = Article::load(path, index)?;
            if let Some(entry) = self.migrate_article(&article, &mut claimed, &mut result)? {
                result.entries.push(entry);
            }
        }

        report::write_report(&result.entries, &self.config.report_path)?;
        result.record_change(&self.config.report_path, ChangeType::Created, "slug mapping report");
        info!("Report written to {}", self.config.report_path.display());

        report::log_summary(&result);
        Ok(result)
    }

    /// Migrate one article. `Ok(None)` means it was skipped and the skip already recorded.
    fn migrate_article(
        &self,
        article: &Article,
        claimed: &mut HashMap<Slug, PathBuf>,
        result: &mut MigrationResult,
    ) -> Result<Option<ReportEntry>, MigrateError> {
        let source = article.source_path.display().to_string();

        let title = match article.title.as_deref() {
            Some(title) => title,
            None => {
                result.record_failure(FailureKind::MissingTitle, format!("{} has no level-1 heading", source));
                return Ok(None);
            }
        };

        let slug = match self.deriver.derive(title) {
            Ok(slug) => slug,
            Err(e) => {
                result.record_failure(FailureKind::DegenerateSlug, format!("{}: {}", source, e));
                return Ok(None);
            }
        };

        if let Some(owner) = claimed.get(&slug) {
            result.record_failure(
                FailureKind::SlugCollision,
                format!("{} derives `{}`, already used by {}", source, slug, owner.display()),
            );
            return Ok(None);
        }
        claimed.insert(slug.clone(), article.source_path.clone());

        let (front_matter, body) = self.synthesizer.synthesize(article, &slug)?;
        debug!("{} -> {} on {}", title, slug, front_matter.date);

        let relocation = self.relocator.relocate(article, &slug, &body)?;
        for copied in &relocation.copied {
            result.record_change(copied, ChangeType::Copied, format!("image for {}", slug));
        }
        for missing in &relocation.missing {
            result.record_failure(FailureKind::AssetNotFound, format!("{} references {}", source, missing));
        }

        let destination = self
            .config
            .blog_dir
            .join(format!("{}-{}.md", front_matter.date, slug));
        write_file(&destination, &front_matter.to_document(&relocation.body))?;
        result.record_change(&destination, ChangeType::Converted, format!("from {}", source));

        Ok(Some(ReportEntry {
            source,
            destination: destination.display().to_string(),
            original_title: title.to_string(),
            slug: slug.to_string(),
            date: front_matter.date,
            tags: front_matter.tags,
        }))
    }
}
