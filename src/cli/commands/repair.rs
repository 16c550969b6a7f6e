use crate::cli::types::Commands;
use crate::cli::{finish, FATAL_EXIT_CODE};
use crate::config::MigrationConfig;
use crate::migrate::repair_posts;

pub fn handle_repair_command(command: &Commands, config: MigrationConfig) -> i32 {
    if let Commands::Repair { blog_dir, max_description } = command {
        let blog_dir = blog_dir.clone().unwrap_or(config.blog_dir);
        let max_chars = max_description.unwrap_or(config.repair_description_max_chars);

        if max_chars < 4 {
            log::error!("--max-description must be at least 4, got {}", max_chars);
            return FATAL_EXIT_CODE;
        }

        return finish("Repair", repair_posts(&blog_dir, max_chars));
    }

    FATAL_EXIT_CODE
}
