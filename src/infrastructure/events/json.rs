//! JSON Event Sink
//!
//! Outputs automator events as NDJSON for CI/automation consumption.

use crate::domain::ports::{AutomatorEvent, AutomatorEventSink};
use crate::domain::value_objects::Verbosity;
use std::io::{self, Write};
use std::sync::Mutex;

const COMMAND: &str = "type-script-automator";

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity: Verbosity::default(),
        }
    }

    /// Only emit events this verbosity allows
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl AutomatorEventSink for JsonEventSink {
    fn on_event(&self, event: AutomatorEvent) {
        let level = event.level();
        if !self.verbosity.allows(level) {
            return;
        }

        let Ok(mut json) = serde_json::to_value(&event) else {
            return;
        };
        if let Some(object) = json.as_object_mut() {
            object.insert("command".to_string(), COMMAND.into());
            if let Ok(level) = serde_json::to_value(level) {
                object.insert("level".to_string(), level);
            }
        }

        self.write_event(json);
    }
}
