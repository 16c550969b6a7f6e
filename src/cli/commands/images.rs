use crate::cli::types::Commands;
use crate::cli::{finish, FATAL_EXIT_CODE};
use crate::config::MigrationConfig;
use crate::migrate::relocate_post_images;

pub fn handle_images_command(command: &Commands, mut config: MigrationConfig) -> i32 {
    if let Commands::Images { source, blog_dir, assets } = command {
        if let Some(s) = source {
            config.source = s.clone();
        }
        if let Some(d) = blog_dir {
            config.blog_dir = d.clone();
        }
        if let Some(a) = assets {
            config.asset_root = a.clone();
        }

        return finish("Image relocation", relocate_post_images(&config));
    }

    FATAL_EXIT_CODE
}
