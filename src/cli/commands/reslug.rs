use crate::cli::types::Commands;
use crate::cli::{finish, FATAL_EXIT_CODE};
use crate::config::MigrationConfig;
use crate::migrate::reslug_posts;

pub fn handle_reslug_command(command: &Commands, mut config: MigrationConfig) -> i32 {
    if let Commands::Reslug { blog_dir } = command {
        if let Some(d) = blog_dir {
            config.blog_dir = d.clone();
        }

        return finish("Reslug", reslug_posts(&config));
    }

    FATAL_EXIT_CODE
}
