use crate::cli::types::Commands;
use crate::cli::FATAL_EXIT_CODE;
use crate::config::MigrationConfig;
use crate::migrate::RunStatus;
use crate::utils::error::FailureKind;

pub fn handle_slug_command(command: &Commands, mut config: MigrationConfig) -> i32 {
    if let Commands::Slug { title, strategy } = command {
        if let Some(s) = strategy {
            config.strategy = *s;
        }

        return match config.slug_deriver().derive(title) {
            Ok(slug) => {
                println!("{}", slug);
                RunStatus::Clean.exit_code()
            }
            Err(e) => {
                log::warn!("{}: {}", FailureKind::DegenerateSlug, e);
                RunStatus::ArticleFailures.exit_code()
            }
        };
    }

    FATAL_EXIT_CODE
}
