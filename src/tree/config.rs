//! Configuration for the tree builder

use super::attributes::Attribute;

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Regular expressions tested against each entry's path relative to the
    /// root, components joined with `/`. A match excludes the entry and, for
    /// a directory, everything under it. The root itself is never tested.
    pub exclude: Vec<String>,
    /// Attributes to attach to nodes. Only requested attributes appear in
    /// the output.
    pub attributes: Vec<Attribute>,
    /// List the root's immediate children without expanding them.
    pub first_level: bool,
}
