//! File System Helpers
//!
//! Tree walking and the small set of file operations the automator needs.

mod local;
mod tree;

pub use local::{modified, remove_if_present};
pub use tree::{list_directories, list_source_files, normalize, TreeScan};
