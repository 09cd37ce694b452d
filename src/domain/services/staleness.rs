//! Staleness rules
//!
//! Pure decision logic for the startup reconcile: given the modification
//! times of a source file and its compiled output, decide whether to compile.

use std::time::SystemTime;

/// Whether a source file must be (re)compiled
///
/// Equal timestamps count as stale.
pub fn needs_compile(force: bool, source: SystemTime, output: Option<SystemTime>) -> bool {
    match output {
        _ if force => true,
        None => true,
        Some(output) => source >= output,
    }
}

/// Counters reported at the end of a reconcile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub scanned: usize,
    pub compiled: usize,
    pub failed: usize,
}

impl ReconcileSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
