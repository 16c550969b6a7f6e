use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::slug::SlugStrategy;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "blog-migrate")]
#[command(about = "Migrates a tree of Markdown articles into a blog with English slugs and generated front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./_migrate.yml, ./_migrate.yaml or ./_migrate.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Migrate every article under the source tree into the blog directory
    #[command(alias = "m")]
    Migrate {
        /// Source tree, one subdirectory per article
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Directory migrated posts are written to
        #[arg(short = 'o', long, value_name = "DIR")]
        blog_dir: Option<PathBuf>,

        /// Root directory for copied images
        #[arg(short, long, value_name = "DIR")]
        assets: Option<PathBuf>,

        /// Path of the JSON slug mapping report
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Date of the first article (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        base_date: Option<String>,

        /// Slug derivation strategy
        #[arg(long, value_enum)]
        strategy: Option<SlugStrategy>,
    },

    /// Re-key migrated posts to English slugs
    Reslug {
        /// Blog directory holding the migrated posts
        #[arg(short = 'o', long, value_name = "DIR")]
        blog_dir: Option<PathBuf>,
    },

    /// Fix quoting in the title and description of migrated posts
    Repair {
        /// Blog directory holding the migrated posts
        #[arg(short = 'o', long, value_name = "DIR")]
        blog_dir: Option<PathBuf>,

        /// Maximum description length after repair
        #[arg(long, value_name = "CHARS")]
        max_description: Option<usize>,
    },

    /// Copy images referenced by migrated posts and rewrite their paths
    Images {
        /// Source tree the images are searched in
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Blog directory holding the migrated posts
        #[arg(short = 'o', long, value_name = "DIR")]
        blog_dir: Option<PathBuf>,

        /// Root directory for copied images
        #[arg(short, long, value_name = "DIR")]
        assets: Option<PathBuf>,
    },

    /// Print the slug derived for a title
    Slug {
        /// Title to derive a slug from
        title: String,

        /// Slug derivation strategy
        #[arg(long, value_enum)]
        strategy: Option<SlugStrategy>,
    },
}
