//! Automate Use Case
//!
//! The TypeScript automator: a single-threaded watch-and-recompile loop over
//! the asset root. It orchestrates:
//! - One watch per directory, added and retired as the tree changes
//! - Dispatch of raw filesystem events by mask priority
//! - Compiling sources, fixing outputs and removing orphaned artifacts
//! - A timestamp-based reconcile at start
//!
//! ## Usage
//!
//! ```ignore
//! let options = AutomateOptions::new("www/js");
//! let use_case = AutomateUseCase::new(SystemProcessRunner::new(), AmdModuleFixer::new(), options);
//! use_case.start(&mut facility, running, &sink)?;
//! ```

mod build;
mod dispatcher;
mod options;
mod reactor;
mod use_case;


pub use dispatcher::{classify, Reaction, UNKNOWN_DIRECTORY};
pub use options::{AutomateOptions, CompilerSettings, DEFAULT_POLL_INTERVAL_MS};
pub use use_case::AutomateUseCase;
