//! JSON output writing

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::tree::TreeNode;

/// Serialize a tree and write it to `output`, or to stdout when `output` is
/// `None`. Pretty mode indents with two spaces; compact mode adds no
/// whitespace. An existing output file is overwritten.
pub fn write_json(node: &TreeNode, pretty: bool, output: Option<&Path>) -> io::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    match output {
        Some(path) => fs::write(path, json),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")
        }
    }
}
