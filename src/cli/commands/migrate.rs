use crate::cli::types::Commands;
use crate::cli::{finish, FATAL_EXIT_CODE};
use crate::config::{validate_config, MigrationConfig};
use crate::migrate::Pipeline;

pub fn handle_migrate_command(command: &Commands, mut config: MigrationConfig) -> i32 {
    if let Commands::Migrate { source, blog_dir, assets, report, base_date, strategy } = command {
        if let Some(s) = source {
            config.source = s.clone();
        }
        if let Some(d) = blog_dir {
            config.blog_dir = d.clone();
        }
        if let Some(a) = assets {
            config.asset_root = a.clone();
        }
        if let Some(r) = report {
            config.report_path = r.clone();
        }
        if let Some(date) = base_date {
            config.base_date = date.clone();
        }
        if let Some(s) = strategy {
            config.strategy = *s;
        }

        if let Err(e) = validate_config(&config) {
            log::error!("Invalid configuration: {}", e);
            return FATAL_EXIT_CODE;
        }

        log::info!("Source directory: {}", config.source.display());
        log::info!("Blog directory: {}", config.blog_dir.display());
        log::info!("Asset directory: {}", config.asset_root.display());

        let outcome = Pipeline::new(config).and_then(|pipeline| pipeline.run());
        return finish("Migration", outcome);
    }

    FATAL_EXIT_CODE
}
