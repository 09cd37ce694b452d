//! Automator Event Port
//!
//! Every component reports what it does through this port instead of printing.
//! The binary renders events for humans or as NDJSON.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{EventMask, Level, WatchHandle};

/// Event emitted while the automator runs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AutomatorEvent {
    /// Initial scan finished, the automator is about to reconcile and watch
    Started {
        root: PathBuf,
        directories: usize,
        force: bool,
    },
    /// A watch was registered on a directory
    WatchingDirectory { path: PathBuf, handle: WatchHandle },
    /// A watched directory went away and its watch was dropped
    StoppedWatching { path: PathBuf, handle: WatchHandle },
    /// One catalogue flag contained in a received event
    EventFlag {
        name: &'static str,
        description: &'static str,
        mask: EventMask,
        flag: EventMask,
        path: PathBuf,
    },
    /// An event referenced a watch that is no longer tracked
    UnknownWatchHandle { handle: WatchHandle, name: PathBuf },
    /// An entry was skipped while walking the tree
    ScanSkipped { message: String },
    /// The compiler is about to run
    Compiling { command: String },
    /// The compiler exited unsuccessfully
    CompileFailed {
        source: PathBuf,
        status: Option<i32>,
        output: Vec<String>,
    },
    /// A derived artifact was removed
    FileRemoved { path: PathBuf },
    /// Compiled output went through the fixer
    OutputFixed { path: PathBuf, rewritten: bool },
    /// Startup (or forced) reconcile finished
    ReconcileComplete {
        scanned: usize,
        compiled: usize,
        failed: usize,
    },
    /// Reacting to one event failed; the loop carries on
    EventFailed {
        path: PathBuf,
        message: String,
        causes: Vec<String>,
    },
    /// The watch loop ended
    Stopped,
}

impl AutomatorEvent {
    pub fn level(&self) -> Level {
        match self {
            AutomatorEvent::Started { .. }
            | AutomatorEvent::Compiling { .. }
            | AutomatorEvent::ReconcileComplete { .. }
            | AutomatorEvent::Stopped => Level::Info,
            AutomatorEvent::WatchingDirectory { .. }
            | AutomatorEvent::StoppedWatching { .. }
            | AutomatorEvent::FileRemoved { .. }
            | AutomatorEvent::OutputFixed { .. }
            | AutomatorEvent::EventFlag { .. } => Level::Verbose,
            AutomatorEvent::UnknownWatchHandle { .. } | AutomatorEvent::ScanSkipped { .. } => {
                Level::Warning
            }
            AutomatorEvent::CompileFailed { .. } | AutomatorEvent::EventFailed { .. } => {
                Level::Error
            }
        }
    }

    /// Build an `EventFailed` from an error, keeping its `source()` chain
    pub fn failure(path: PathBuf, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        AutomatorEvent::EventFailed {
            path,
            message: err.to_string(),
            causes,
        }
    }
}

/// Trait for receiving automator events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable lines filtered by verbosity
/// - `JsonEventSink`: NDJSON event stream for CI
pub trait AutomatorEventSink {
    fn on_event(&self, event: AutomatorEvent);
}
