use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::MigrationConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, MigrateError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_migrate.yml", "_migrate.yaml", "_migrate.toml"];

/// Load configuration from an explicit file, or from the first default file found in `search_dir`
pub fn load_config<P: AsRef<Path>>(
    search_dir: P,
    config_file: Option<&Path>,
) -> BoxResult<MigrationConfig> {
    let config_path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(&search_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            MigrationConfig::default()
        }
    };

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file that exists
fn find_default_config_file<P: AsRef<Path>>(search_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| search_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Read and parse a configuration file, picking the format from its extension
fn read_config_file(config_path: &Path) -> BoxResult<MigrationConfig> {
    if !config_path.exists() {
        return Err(MigrateError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| MigrateError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let config = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str::<MigrationConfig>(&content)
            .map_err(|e| MigrateError::Config(format!(
                "Failed to parse YAML configuration ({}): {}", config_path.display(), e
            )))?,
        "toml" => toml::from_str::<MigrationConfig>(&content)
            .map_err(|e| MigrateError::Config(format!(
                "Failed to parse TOML configuration ({}): {}", config_path.display(), e
            )))?,
        "json" => serde_json::from_str::<MigrationConfig>(&content)
            .map_err(|e| MigrateError::Config(format!(
                "Failed to parse JSON configuration ({}): {}", config_path.display(), e
            )))?,
        other => {
            return Err(MigrateError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    Ok(config)
}
