//! Output fixer port - post-processes freshly compiled output

use std::path::Path;

use crate::error::PlaisioResult;

/// What the fixer did to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Rewritten,
    Unchanged,
}

/// Rewrites a compiled output file in place
///
/// Fixers must be idempotent: rewriting a file triggers another
/// close-after-write event for it, and the second pass must leave it alone.
pub trait OutputFixer {
    fn fix(&self, output: &Path, asset_root: &Path) -> PlaisioResult<FixOutcome>;
}

