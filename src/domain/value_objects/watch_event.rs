//! Watch handles and raw filesystem events

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::EventMask;

/// Opaque identifier of one registered directory watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WatchHandle(i32);

impl WatchHandle {
    /// Handle of events that belong to no registered watch (e.g. queue overflow)
    pub const UNKNOWN: WatchHandle = WatchHandle(-1);

    pub const fn new(raw: i32) -> Self {
        WatchHandle(raw)
    }
}

impl std::fmt::Display for WatchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One event as reported by the watch facility
///
/// `name` is relative to the watched directory and empty when the event is
/// about the watched directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub handle: WatchHandle,
    pub mask: EventMask,
    pub name: PathBuf,
}

impl RawEvent {
    pub fn new(handle: WatchHandle, mask: EventMask, name: impl Into<PathBuf>) -> Self {
        Self {
            handle,
            mask,
            name: name.into(),
        }
    }

    /// Path of the event subject given the directory its handle resolves to
    pub fn path_in(&self, directory: &Path) -> PathBuf {
        if self.name.as_os_str().is_empty() {
            directory.to_path_buf()
        } else {
            directory.join(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_in_joins_relative_name() {
        let event = RawEvent::new(WatchHandle::new(3), EventMask::CREATE, "a.ts");
        assert_eq!(event.path_in(Path::new("/js")), PathBuf::from("/js/a.ts"));
    }

    #[test]
    fn path_in_without_name_is_the_directory() {
        let event = RawEvent::new(WatchHandle::new(3), EventMask::DELETE_SELF, "");
        assert_eq!(event.path_in(Path::new("/js/sub")), PathBuf::from("/js/sub"));
    }
}
