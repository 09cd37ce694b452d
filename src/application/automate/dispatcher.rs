//! Event Dispatcher
//!
//! Waits for the facility, drains batches and routes every event to exactly
//! one reaction. A failing reaction is reported and never stops the loop.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::domain::ports::{AutomatorEvent, Readiness};
use crate::domain::value_objects::{EventMask, RawEvent};
use crate::error::{PlaisioError, PlaisioResult};

use super::reactor::Session;

/// Directory reported for events whose watch handle is not tracked
pub const UNKNOWN_DIRECTORY: &str = "-";

/// Reaction selected for an event mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    WriteComplete,
    MovedIn,
    Created,
    MovedOut,
    Removed,
    SelfRemoved,
    Ignored,
}

/// Pick the reaction for a mask; the first matching rule wins
pub fn classify(mask: EventMask) -> Option<Reaction> {
    const RULES: &[(EventMask, Reaction)] = &[
        (EventMask::CLOSE_WRITE, Reaction::WriteComplete),
        (EventMask::MOVED_TO, Reaction::MovedIn),
        (EventMask::CREATE, Reaction::Created),
        (EventMask::MOVED_FROM, Reaction::MovedOut),
        (EventMask::DELETE, Reaction::Removed),
        (EventMask::DELETE_SELF, Reaction::SelfRemoved),
        (EventMask::IGNORED, Reaction::Ignored),
    ];

    RULES
        .iter()
        .find(|(flag, _)| mask.contains(*flag))
        .map(|(_, reaction)| *reaction)
}

impl Session<'_> {
    /// Wait, drain and dispatch until the facility closes or `running` clears
    pub(super) fn run(&mut self, running: &AtomicBool, poll_interval: Duration) {
        while running.load(Ordering::SeqCst) {
            match self.facility.wait(poll_interval) {
                Readiness::Ready => {
                    for event in self.facility.drain() {
                        self.dispatch(event);
                    }
                }
                Readiness::Idle => {}
                Readiness::Closed => break,
            }
        }
    }

    /// Handle one event, reporting instead of propagating any failure
    pub(super) fn dispatch(&mut self, event: RawEvent) {
        let path = self.resolve(&event);
        for info in event.mask.flags() {
            self.build.emit(AutomatorEvent::EventFlag {
                name: info.name,
                description: info.description,
                mask: event.mask,
                flag: info.mask,
                path: path.clone(),
            });
        }

        if let Err(err) = self.react(&event, &path) {
            self.build.emit(AutomatorEvent::failure(path, &err));
        }
    }

    fn resolve(&self, event: &RawEvent) -> PathBuf {
        match self.watches.resolve(event.handle) {
            Some(dir) => event.path_in(dir),
            None => event.path_in(Path::new(UNKNOWN_DIRECTORY)),
        }
    }

    fn react(&mut self, event: &RawEvent, path: &Path) -> PlaisioResult<()> {
        let Some(reaction) = classify(event.mask) else {
            return Err(PlaisioError::UnhandledEventMask {
                mask: event.mask,
                path: path.to_path_buf(),
            });
        };

        if reaction == Reaction::Ignored {
            return Ok(());
        }

        if self.watches.resolve(event.handle).is_none() {
            self.build.emit(AutomatorEvent::UnknownWatchHandle {
                handle: event.handle,
                name: event.name.clone(),
            });
            return Ok(());
        }

        match reaction {
            Reaction::WriteComplete => self.on_write_complete(path),
            Reaction::MovedIn => self.on_moved_in(path),
            Reaction::Created => self.on_created(path),
            Reaction::MovedOut => self.on_moved_out(path),
            Reaction::Removed => self.on_removed(path),
            Reaction::SelfRemoved => {
                self.on_self_removed(event.handle);
                Ok(())
            }
            Reaction::Ignored => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_write_wins_over_everything_else() {
        let mask = EventMask::CLOSE_WRITE | EventMask::MOVED_TO | EventMask::CREATE;
        assert_eq!(classify(mask), Some(Reaction::WriteComplete));
    }

    #[test]
    fn moved_from_moves_out_and_delete_removes() {
        assert_eq!(classify(EventMask::MOVED_FROM), Some(Reaction::MovedOut));
        assert_eq!(
            classify(EventMask::MOVED_FROM | EventMask::ISDIR),
            Some(Reaction::MovedOut)
        );
        assert_eq!(
            classify(EventMask::DELETE | EventMask::ISDIR),
            Some(Reaction::Removed)
        );
    }

    #[test]
    fn priority_order() {
        assert_eq!(classify(EventMask::MOVED_TO), Some(Reaction::MovedIn));
        assert_eq!(
            classify(EventMask::CREATE | EventMask::ISDIR),
            Some(Reaction::Created)
        );
        assert_eq!(
            classify(EventMask::DELETE_SELF | EventMask::IGNORED),
            Some(Reaction::SelfRemoved)
        );
        assert_eq!(classify(EventMask::IGNORED), Some(Reaction::Ignored));
    }

    #[test]
    fn other_masks_are_unhandled() {
        assert_eq!(classify(EventMask::Q_OVERFLOW), None);
        assert_eq!(classify(EventMask::MODIFY), None);
        assert_eq!(classify(EventMask::ISDIR), None);
        assert_eq!(classify(EventMask::EMPTY), None);
    }
}
