use chrono::{Days, NaiveDate};

use crate::config::MigrationConfig;
use crate::front_matter::extractor::extract_description;
use crate::front_matter::tags::TagTable;
use crate::front_matter::types::FrontMatter;
use crate::migrate::Article;
use crate::slug::Slug;
use crate::utils::error::MigrateError;
use crate::utils::path::url_join;

/// Builds front matter for freshly read articles
#[derive(Debug, Clone)]
pub struct Synthesizer {
    tags: TagTable,
    base_date: NaiveDate,
    date_step_days: u64,
    authors: Vec<String>,
    slug_prefix: String,
    description_max_chars: usize,
    description_placeholder: String,
}

impl Synthesizer {
    pub fn new(config: &MigrationConfig) -> Result<Self, MigrateError> {
        Ok(Synthesizer {
            tags: config.tag_table(),
            base_date: config.base_date()?,
            date_step_days: config.date_step_days.max(1) as u64,
            authors: config.authors.clone(),
            slug_prefix: config.slug_prefix.clone(),
            description_max_chars: config.description_max_chars,
            description_placeholder: config.description_placeholder.clone(),
        })
    }

    /// Publication date for the article at `index` in path order
    pub fn article_date(&self, index: usize) -> Result<NaiveDate, MigrateError> {
        (index as u64)
            .checked_mul(self.date_step_days)
            .and_then(|days| self.base_date.checked_add_days(Days::new(days)))
            .ok_or_else(|| MigrateError::Generic(format!("date for article #{} is out of range", index)))
    }

    /// Produce the header and body for `article`. Fails only when the article has no title.
    pub fn synthesize(&self, article: &Article, slug: &Slug) -> Result<(FrontMatter, String), MigrateError> {
        let title = article.title.as_deref().ok_or_else(|| {
            MigrateError::FrontMatter(format!(
                "no level-1 heading in {}", article.source_path.display()
            ))
        })?;

        let slug_field = if self.slug_prefix.trim().is_empty() {
            slug.to_string()
        } else {
            url_join(&self.slug_prefix, &[slug.as_str()])
        };

        let front_matter = FrontMatter {
            slug: slug_field,
            title: title.to_string(),
            authors: self.authors.clone(),
            tags: self.tags.extract(title, &article.body, &article.folder_name),
            date: self.article_date(article.index)?.format("%Y-%m-%d").to_string(),
            description: extract_description(
                &article.body,
                self.description_max_chars,
                &self.description_placeholder,
            ),
        };

        Ok((front_matter, article.body.clone()))
    }
}
