//! Plaisio Console - developer tooling for Plaisio web applications
//!
//! The main tool is the TypeScript automator: it watches the JavaScript asset
//! tree, recompiles TypeScript sources when they change, removes stale
//! compiled output when a source goes away, and names the anonymous AMD
//! modules the compiler emits.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AutomateOptions, AutomateUseCase, CompilerSettings};
pub use config::Config;
pub use domain::ports::{AutomatorEvent, AutomatorEventSink};
pub use domain::value_objects::{EventMask, Verbosity};
pub use error::{PlaisioError, PlaisioResult};
