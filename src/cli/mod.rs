//! CLI command implementations

pub mod context;
pub mod style;
mod tree;

pub use tree::{TreeArgs, TreeOptions, run_tree};
