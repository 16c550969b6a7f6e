//! Front matter: synthesis for new posts, repair for migrated ones.

pub mod types;
pub mod parser;
pub mod extractor;
pub mod tags;
pub mod synthesizer;
pub mod repair;

pub use parser::{split_front_matter, parse_mapping, render_document};
pub use extractor::split_title_and_body;
pub use synthesizer::Synthesizer;
pub use repair::repair_document;
