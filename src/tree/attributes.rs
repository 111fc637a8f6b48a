//! Attribute vocabulary and metadata extractors
//!
//! Attribute requests are string-keyed at the CLI but resolve to this closed
//! enum at configuration time; unknown names are rejected while parsing
//! arguments, long before any traversal starts.

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde_json::Value;

use super::node::AttributeMap;

/// A named piece of metadata attached to a node on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Attribute {
    /// Size in bytes. For directories, the aggregate size of the subtree
    /// (omitted in first-level mode, where the subtree is not traversed).
    Size,
    /// `"file"` or `"directory"`.
    Type,
    /// Final extension including the leading dot, files only.
    Extension,
    /// Modification time as an RFC 3339 UTC timestamp.
    Mtime,
}

impl Attribute {
    /// JSON key for this attribute.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Size => "size",
            Attribute::Type => "type",
            Attribute::Extension => "extension",
            Attribute::Mtime => "mtime",
        }
    }
}

/// Collect the requested attributes for one entry from its metadata.
///
/// Directory `size` is not computed here: the builder aggregates it from the
/// children after recursion.
pub fn collect(path: &Path, meta: &Metadata, requested: &[Attribute]) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    for attribute in requested {
        if let Some(value) = extract(*attribute, path, meta) {
            attributes.insert(attribute.key(), value);
        }
    }
    attributes
}

fn extract(attribute: Attribute, path: &Path, meta: &Metadata) -> Option<Value> {
    match attribute {
        Attribute::Size => meta.is_file().then(|| Value::from(meta.len())),
        Attribute::Type => {
            let kind = if meta.is_dir() { "directory" } else { "file" };
            Some(Value::from(kind))
        }
        Attribute::Extension => {
            if meta.is_dir() {
                return None;
            }
            path.extension()
                .map(|ext| Value::from(format!(".{}", ext.to_string_lossy())))
        }
        Attribute::Mtime => {
            let mtime = meta.modified().ok()?;
            serde_json::to_value(DateTime::<Utc>::from(mtime)).ok()
        }
    }
}
