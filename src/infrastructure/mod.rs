//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Tree walking and file helpers
//! - `watch/` - Watch facility backed by `notify`
//! - `process/` - Process runner backed by `std::process`
//! - `fixer/` - Output fixers (AMD module naming)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod fixer;
pub mod fs;
pub mod process;
pub mod watch;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fixer::AmdModuleFixer;
pub use process::SystemProcessRunner;
pub use watch::NotifyFacility;
