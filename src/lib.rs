//! Canopy - walk a directory and emit its structure as JSON

pub mod output;
pub mod tree;

pub use output::write_json;
pub use tree::{Attribute, BuildError, BuildReport, BuilderConfig, TreeBuilder, TreeNode, Warning};
