//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

mod amd_module;
mod staleness;

pub use amd_module::{module_id, name_anonymous_define};
pub use staleness::{needs_compile, ReconcileSummary};
