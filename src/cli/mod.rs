pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::path::Path;

use crate::config;
use crate::migrate::MigrationResult;

/// Exit code for configuration and filesystem errors
pub const FATAL_EXIT_CODE: i32 = 1;

/// Run the command-line interface and return the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match config::load_config(Path::new("."), cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return FATAL_EXIT_CODE;
        }
    };

    match &cli.command {
        types::Commands::Migrate { .. } => commands::handle_migrate_command(&cli.command, config),
        types::Commands::Reslug { .. } => commands::handle_reslug_command(&cli.command, config),
        types::Commands::Repair { .. } => commands::handle_repair_command(&cli.command, config),
        types::Commands::Images { .. } => commands::handle_images_command(&cli.command, config),
        types::Commands::Slug { .. } => commands::handle_slug_command(&cli.command, config),
    }
}

/// Map a finished batch operation onto an exit code
fn finish<E: std::fmt::Display>(operation: &str, outcome: Result<MigrationResult, E>) -> i32 {
    match outcome {
        Ok(result) => {
            let status = result.status();
            log::info!(
                "{} finished: {} change(s), {} warning(s)",
                operation,
                result.changes.len(),
                result.warnings.len()
            );
            status.exit_code()
        }
        Err(e) => {
            log::error!("{} failed: {}", operation, e);
            FATAL_EXIT_CODE
        }
    }
}
