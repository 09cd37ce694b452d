//! Human-readable automator output

use std::io::Write;

use plaisio_console::domain::value_objects::Level;
use plaisio_console::{AutomatorEvent, AutomatorEventSink, Verbosity};

use crate::ui::context::UiContext;
use crate::ui::views::automate::render_automator_event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Prints timestamped event lines, errors and warnings to stderr
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            verbosity: ui.verbosity,
            color: ui.color,
            unicode: ui.unicode,
        }
    }

    fn render(&self, timestamp: &str, event: &AutomatorEvent) -> Option<(Stream, String)> {
        let level = event.level();
        if !self.verbosity.allows(level) {
            return None;
        }
        let stream = match level {
            Level::Error | Level::Warning => Stream::Stderr,
            Level::Info | Level::Verbose | Level::VeryVerbose => Stream::Stdout,
        };
        Some((
            stream,
            render_automator_event(timestamp, event, self.color, self.unicode),
        ))
    }
}

impl AutomatorEventSink for ConsoleEventSink {
    fn on_event(&self, event: AutomatorEvent) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let Some((stream, text)) = self.render(&timestamp, &event) else {
            return;
        };
        // A closed pipe must not take the automator down.
        let _ = match stream {
            Stream::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|_| out.flush())
            }
            Stream::Stderr => std::io::stderr().lock().write_all(text.as_bytes()),
        };
    }
}
