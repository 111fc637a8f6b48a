//! Directory tree building logic
//!
//! `TreeBuilder` walks a filesystem subtree and produces a serializable
//! `TreeNode` tree: exclusion filtering by regular expression, optional
//! first-level truncation, and per-node attribute collection. The full tree
//! is built in memory, which is what JSON serialization needs.

mod attributes;
mod builder;
mod config;
mod error;
mod node;

pub use attributes::Attribute;
pub use builder::{BuildReport, TreeBuilder};
pub use config::BuilderConfig;
pub use error::{BuildError, Warning};
pub use node::{AttributeMap, TreeNode};
