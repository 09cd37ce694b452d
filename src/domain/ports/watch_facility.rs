//! Watch facility port - abstraction over the OS filesystem notification API
//!
//! The facility hands out one `WatchHandle` per registered directory and
//! reports events as `(handle, mask, name)` triples, the way inotify does.

use std::path::Path;
use std::time::Duration;

use crate::domain::value_objects::{EventMask, RawEvent, WatchHandle};
use crate::error::PlaisioResult;

/// Outcome of waiting on the facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// At least one event can be drained
    Ready,
    /// The timeout passed without events
    Idle,
    /// The facility is gone; no event will ever arrive again
    Closed,
}

/// Abstract filesystem notification facility
///
/// Implementations:
/// - `NotifyFacility` - backed by the `notify` crate
/// - scripted facilities in tests
pub trait WatchFacility {
    /// Register `path` for the events in `mask`
    ///
    /// Registering the same directory twice returns the same handle.
    fn add_watch(&mut self, path: &Path, mask: EventMask) -> PlaisioResult<WatchHandle>;

    /// Stop observing the directory behind `handle`
    ///
    /// Unknown or already retired handles are ignored. A later `add_watch` on
    /// the same path hands out a fresh handle.
    fn remove_watch(&mut self, handle: WatchHandle);

    /// Block until events are ready, the timeout elapses, or the facility closes
    fn wait(&mut self, timeout: Duration) -> Readiness;

    /// Every event buffered right now, in the order it was reported
    fn drain(&mut self) -> Vec<RawEvent>;
}
