//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod automator_events;
pub mod output_fixer;
pub mod process_runner;
pub mod watch_facility;

pub use automator_events::{AutomatorEvent, AutomatorEventSink};
pub use output_fixer::{FixOutcome, OutputFixer};
pub use process_runner::{CommandLine, ProcessOutput, ProcessRunner};
pub use watch_facility::{Readiness, WatchFacility};
