//! Event Sink Implementations
//!
//! Provides concrete implementations of AutomatorEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink lives in the binary's `ui` module

mod json;

pub use json::JsonEventSink;
