// Module declarations
mod assets;
mod cli;
mod config;
mod front_matter;
mod migrate;
mod slug;
mod utils;

fn main() {
    std::process::exit(cli::run());
}
