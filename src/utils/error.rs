use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for glue code that mixes error sources
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for migration operations
#[derive(Debug)]
pub enum MigrateError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing or rendering error
    FrontMatter(String),
    /// Slug derivation or validation error
    Slug(String),
    /// Asset discovery or copy error
    Asset(String),
    /// Report serialization error
    Report(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Io(err) => write!(f, "IO error: {}", err),
            MigrateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MigrateError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            MigrateError::Slug(msg) => write!(f, "Slug error: {}", msg),
            MigrateError::Asset(msg) => write!(f, "Asset error: {}", msg),
            MigrateError::Report(msg) => write!(f, "Report error: {}", msg),
            MigrateError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MigrateError {}

impl From<io::Error> for MigrateError {
    fn from(err: io::Error) -> Self {
        MigrateError::Io(err)
    }
}

impl From<String> for MigrateError {
    fn from(msg: String) -> Self {
        MigrateError::Generic(msg)
    }
}

impl From<&str> for MigrateError {
    fn from(msg: &str) -> Self {
        MigrateError::Generic(msg.to_string())
    }
}

/// Per-article outcomes that skip or degrade an article without stopping the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    /// No level-1 heading in the article
    MissingTitle,
    /// Slug derivation produced nothing usable
    DegenerateSlug,
    /// Another article already claimed the slug
    SlugCollision,
    /// An image reference did not resolve to a source file
    AssetNotFound,
    /// An existing header block could not be parsed
    MalformedHeader,
}

impl FailureKind {
    /// Whether this kind drops the whole article rather than a single reference
    pub fn is_article_failure(&self) -> bool {
        matches!(
            self,
            FailureKind::MissingTitle | FailureKind::DegenerateSlug | FailureKind::SlugCollision
        )
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingTitle => write!(f, "missing title"),
            FailureKind::DegenerateSlug => write!(f, "degenerate slug"),
            FailureKind::SlugCollision => write!(f, "slug collision"),
            FailureKind::AssetNotFound => write!(f, "asset not found"),
            FailureKind::MalformedHeader => write!(f, "malformed header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = MigrateError::Config("bad base_date".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad base_date");

        let err: MigrateError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_article_failures() {
        assert!(FailureKind::MissingTitle.is_article_failure());
        assert!(FailureKind::SlugCollision.is_article_failure());
        assert!(!FailureKind::AssetNotFound.is_article_failure());
        assert!(!FailureKind::MalformedHeader.is_article_failure());
    }
}
