//! TreeBuilder - the traversal engine

use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;

use regex::Regex;
use serde_json::Value;

use super::attributes::{self, Attribute};
use super::config::BuilderConfig;
use super::error::{BuildError, Warning};
use super::node::TreeNode;

/// Result of a successful build: the root node plus any recoverable
/// problems encountered along the way.
#[derive(Debug)]
pub struct BuildReport {
    pub root: TreeNode,
    pub warnings: Vec<Warning>,
}

/// Builds the full tree in memory with a single-threaded, depth-first walk.
///
/// Exclusion patterns are compiled once at construction and reused for every
/// entry; a pattern that fails to compile surfaces as `InvalidPattern`
/// before any filesystem access happens. Recursion uses the call stack,
/// which comfortably covers realistic directory depths.
#[derive(Debug)]
pub struct TreeBuilder {
    config: BuilderConfig,
    exclude: Vec<Regex>,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Result<Self, BuildError> {
        let mut exclude = Vec::with_capacity(config.exclude.len());
        for pattern in &config.exclude {
            let regex = Regex::new(pattern).map_err(|source| BuildError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            exclude.push(regex);
        }
        Ok(Self { config, exclude })
    }

    /// Build the tree rooted at `root`.
    ///
    /// Errors on the root itself (missing, unreadable) are fatal; failures
    /// below the root skip the offending entry and are reported in
    /// [`BuildReport::warnings`]. A root that is a file produces a single
    /// File node.
    pub fn build(&self, root: &Path) -> Result<BuildReport, BuildError> {
        // Follows a root symlink; entries below the root are not followed.
        let meta = fs::metadata(root).map_err(|e| root_error(root, e))?;
        let mut warnings = Vec::new();

        let node = if meta.is_file() {
            self.file_node(root, &meta)
        } else {
            if self.config.first_level && self.size_requested() {
                warnings.push(Warning::ShallowDirectorySize {
                    path: root.to_path_buf(),
                });
            }
            let entries = read_entries(root).map_err(|e| root_error(root, e))?;
            self.dir_node(root, &meta, entries, "", &mut warnings)
        };

        Ok(BuildReport {
            root: node,
            warnings,
        })
    }

    fn size_requested(&self) -> bool {
        self.config.attributes.contains(&Attribute::Size)
    }

    /// Patterns match the path relative to the root, components joined
    /// with `/`. The root itself is never tested.
    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|p| p.is_match(relative))
    }

    fn file_node(&self, path: &Path, meta: &Metadata) -> TreeNode {
        TreeNode::File {
            name: base_name(path),
            path: path.to_path_buf(),
            attributes: attributes::collect(path, meta, &self.config.attributes),
        }
    }

    fn dir_node(
        &self,
        path: &Path,
        meta: &Metadata,
        entries: Vec<DirEntry>,
        relative: &str,
        warnings: &mut Vec<Warning>,
    ) -> TreeNode {
        let mut attributes = attributes::collect(path, meta, &self.config.attributes);
        let mut children = Vec::new();

        for entry in entries {
            let entry_path = entry.path();
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let entry_relative = if relative.is_empty() {
                entry_name.clone()
            } else {
                format!("{relative}/{entry_name}")
            };

            if self.is_excluded(&entry_relative) {
                continue;
            }

            let entry_meta = match fs::symlink_metadata(&entry_path) {
                Ok(m) => m,
                Err(e) => {
                    warnings.push(Warning::Unreadable {
                        path: entry_path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            // Symlinks are skipped outright; no cycle tracking needed.
            if entry_meta.file_type().is_symlink() {
                continue;
            }

            if entry_meta.is_file() {
                children.push(self.file_node(&entry_path, &entry_meta));
            } else if entry_meta.is_dir() {
                if self.config.first_level {
                    // Listed but not expanded: children stays absent.
                    children.push(TreeNode::Directory {
                        name: entry_name,
                        path: entry_path.clone(),
                        attributes: attributes::collect(
                            &entry_path,
                            &entry_meta,
                            &self.config.attributes,
                        ),
                        children: None,
                    });
                } else {
                    match read_entries(&entry_path) {
                        Ok(sub_entries) => children.push(self.dir_node(
                            &entry_path,
                            &entry_meta,
                            sub_entries,
                            &entry_relative,
                            warnings,
                        )),
                        Err(e) => warnings.push(Warning::Unreadable {
                            path: entry_path,
                            message: e.to_string(),
                        }),
                    }
                }
            }
        }

        // Directory size is the aggregate of what was actually traversed;
        // in first-level mode it is omitted (see ShallowDirectorySize).
        if self.size_requested() && !self.config.first_level {
            attributes.insert(Attribute::Size.key(), Value::from(subtree_size(&children)));
        }

        TreeNode::Directory {
            name: base_name(path),
            path: path.to_path_buf(),
            attributes,
            children: Some(children),
        }
    }
}

/// Read a directory and sort its entries by file name for deterministic
/// output.
fn read_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

fn root_error(path: &Path, source: io::Error) -> BuildError {
    let path = path.to_path_buf();
    match source.kind() {
        io::ErrorKind::NotFound => BuildError::NotFound { path },
        io::ErrorKind::PermissionDenied => BuildError::PermissionDenied { path },
        _ => BuildError::Io { path, source },
    }
}

fn subtree_size(children: &[TreeNode]) -> u64 {
    children
        .iter()
        .map(|child| {
            child
                .attributes()
                .get(Attribute::Size.key())
                .and_then(Value::as_u64)
                .unwrap_or(0)
        })
        .sum()
}
