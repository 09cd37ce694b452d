//! AMD module naming
//!
//! `tsc -m amd` emits anonymous modules (`define([...], function (...) {`).
//! The asset loader resolves modules by id, so compiled output gets the id
//! derived from its location under the asset root.

use std::path::{Component, Path};

const DEFINE: &str = "define(";

/// Module id of a file below `root`: relative path, no extension, `/` separated
pub fn module_id(file: &Path, root: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Give the first anonymous `define(` call the module id `id`
///
/// Returns `None` when there is no `define(` at the start of a line or the
/// module is already named, so a second pass over the same text is a no-op.
pub fn name_anonymous_define(content: &str, id: &str) -> Option<String> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if let Some(args) = rest.strip_prefix(DEFINE) {
            let args = args.trim_start();
            if args.starts_with('[') || args.starts_with("function") {
                let insert_at = offset + indent + DEFINE.len();
                let mut fixed = String::with_capacity(content.len() + id.len() + 4);
                fixed.push_str(&content[..insert_at]);
                fixed.push('"');
                fixed.push_str(id);
                fixed.push_str("\", ");
                fixed.push_str(&content[insert_at..]);
                return Some(fixed);
            }
            return None;
        }
        offset += line.len();
    }
    None
}
