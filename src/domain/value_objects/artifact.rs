//! Source file / derived artifact naming
//!
//! A source file `a.ts` owns at most one compiled output `a.js` and one map
//! file `a.map`, found by swapping the extension at the same location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The three extensions that tie a source file to its derived artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactExtensions {
    pub source: String,
    pub output: String,
    pub map: String,
}

impl Default for ArtifactExtensions {
    fn default() -> Self {
        Self {
            source: "ts".to_string(),
            output: "js".to_string(),
            map: "map".to_string(),
        }
    }
}

impl ArtifactExtensions {
    pub fn is_source(&self, path: &Path) -> bool {
        has_extension(path, &self.source)
    }

    pub fn is_output(&self, path: &Path) -> bool {
        has_extension(path, &self.output)
    }

    /// Compiled output belonging to a source file
    pub fn output_for(&self, source: &Path) -> PathBuf {
        source.with_extension(&self.output)
    }

    /// Map file belonging to a source file
    pub fn map_for(&self, source: &Path) -> PathBuf {
        source.with_extension(&self.map)
    }

    /// Source file an output file would have been compiled from
    pub fn source_for(&self, output: &Path) -> PathBuf {
        output.with_extension(&self.source)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
