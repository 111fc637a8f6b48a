//! Serializable tree node model

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

/// Attributes attached to a node, keyed by attribute name. A `BTreeMap`
/// keeps serialization order deterministic.
pub type AttributeMap = BTreeMap<&'static str, Value>;

/// One filesystem entry in the output tree.
///
/// For directories, `children: None` means expansion was suppressed by
/// first-level mode and the field is omitted from JSON; `Some(vec![])` is a
/// genuinely empty directory.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        attributes: AttributeMap,
    },
    Directory {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        attributes: AttributeMap,
        #[serde(skip_serializing_if = "Option::is_none")]
        children: Option<Vec<TreeNode>>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    pub fn attributes(&self) -> &AttributeMap {
        match self {
            TreeNode::File { attributes, .. } => attributes,
            TreeNode::Directory { attributes, .. } => attributes,
        }
    }

    /// Children of a directory node, if it was expanded. Always `None` for
    /// file nodes.
    pub fn children(&self) -> Option<&[TreeNode]> {
        match self {
            TreeNode::File { .. } => None,
            TreeNode::Directory { children, .. } => children.as_deref(),
        }
    }
}
