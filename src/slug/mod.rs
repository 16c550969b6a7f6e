//! Slug derivation: title → URL-safe kebab-case identifier.
//!
//! Two strategies are available. [`SlugStrategy::Dictionary`] translates known phrases
//! through a [`PhraseDictionary`] and drops whatever it cannot translate;
//! [`SlugStrategy::Simple`] only strips punctuation and is meant for titles that are
//! already in the Latin alphabet. Both consult the [`OverrideTable`] first.

mod deriver;
mod dictionary;
pub mod tables;

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::utils::error::MigrateError;

pub use deriver::{derive_simple, SlugDeriver};
pub use dictionary::{OverrideTable, PhraseDictionary};

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 100;

/// Which automatic derivation to use when a title has no override entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SlugStrategy {
    /// Phrase dictionary translation, untranslated fragments dropped
    #[default]
    Dictionary,
    /// Punctuation stripping only
    Simple,
}

impl fmt::Display for SlugStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugStrategy::Dictionary => write!(f, "dictionary"),
            SlugStrategy::Simple => write!(f, "simple"),
        }
    }
}

/// A validated slug: `[a-z0-9]+(-[a-z0-9]+)*`, at most [`MAX_SLUG_LEN`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, MigrateError> {
        let value = value.into();
        validate_slug(&value)?;
        Ok(Slug(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn validate_slug(slug: &str) -> Result<(), MigrateError> {
    let is_valid = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if is_valid {
        Ok(())
    } else {
        Err(MigrateError::Slug(format!("`{}` is not a lowercase kebab-case slug", slug)))
    }
}
