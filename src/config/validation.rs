use crate::config::MigrationConfig;
use crate::slug::validate_slug;
use crate::utils::error::{BoxResult, MigrateError};

/// Validate the configuration
pub fn validate_config(config: &MigrationConfig) -> BoxResult<()> {
    config.base_date()?;

    if config.date_step_days <= 0 {
        return Err(MigrateError::Config(
            "date_step_days must be positive so article dates stay distinct".to_string()
        ).into());
    }

    // Room for at least one kept character plus the ellipsis
    if config.description_max_chars < 4 || config.repair_description_max_chars < 4 {
        return Err(MigrateError::Config(
            "description limits must be at least 4 characters".to_string()
        ).into());
    }

    if config.image_extensions.is_empty() {
        return Err(MigrateError::Config("image_extensions must not be empty".to_string()).into());
    }

    if config.authors.is_empty() {
        return Err(MigrateError::Config("authors must not be empty".to_string()).into());
    }

    if config.default_tag.trim().is_empty() {
        return Err(MigrateError::Config("default_tag must not be empty".to_string()).into());
    }

    for (title, slug) in &config.overrides {
        validate_slug(slug).map_err(|e| {
            MigrateError::Config(format!("override for `{}`: {}", title, e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&MigrationConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = MigrationConfig::default();
        config.base_date = "15/01/2025".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = MigrationConfig::default();
        config.overrides.insert("标题".to_string(), "Not A Slug".to_string());
        assert!(validate_config(&config).is_err());

        let mut config = MigrationConfig::default();
        config.description_max_chars = 3;
        assert!(validate_config(&config).is_err());

        let mut config = MigrationConfig::default();
        config.image_extensions.clear();
        assert!(validate_config(&config).is_err());
    }
}
