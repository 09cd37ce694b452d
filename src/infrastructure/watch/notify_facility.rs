//! Watch facility backed by the `notify` crate
//!
//! Every directory gets its own non-recursive watch. notify reports events by
//! path; they are translated back into `(handle, mask, name)` triples and
//! filtered by the mask each directory was registered with, so the automator
//! sees the same stream inotify would deliver.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::event::{AccessKind, AccessMode, CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{Readiness, WatchFacility};
use crate::domain::value_objects::{EventMask, RawEvent, WatchHandle};
use crate::error::{PlaisioError, PlaisioResult};

pub struct NotifyFacility {
    watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    table: WatchTable,
    pending: VecDeque<RawEvent>,
}

impl NotifyFacility {
    pub fn new() -> PlaisioResult<Self> {
        let (tx, rx) = channel();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| PlaisioError::WatcherInit(e.to_string()))?;

        Ok(Self {
            watcher,
            rx,
            table: WatchTable::default(),
            pending: VecDeque::new(),
        })
    }

    fn accept(&mut self, result: notify::Result<Event>) {
        // Backend errors carry no path we could attribute to a watch.
        if let Ok(event) = result {
            self.pending.extend(self.table.translate(&event));
        }
    }
}

impl WatchFacility for NotifyFacility {
    fn add_watch(&mut self, path: &Path, mask: EventMask) -> PlaisioResult<WatchHandle> {
        if let Some(handle) = self.table.handle_of(path) {
            return Ok(handle);
        }

        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| PlaisioError::WatchFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(self.table.register(path, mask))
    }

    fn remove_watch(&mut self, handle: WatchHandle) {
        if let Some(path) = self.table.forget_handle(handle) {
            // Fails when the directory already left with its OS watch.
            let _ = self.watcher.unwatch(&path);
        }
    }

    fn wait(&mut self, timeout: Duration) -> Readiness {
        if !self.pending.is_empty() {
            return Readiness::Ready;
        }

        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.accept(result);
                if self.pending.is_empty() {
                    Readiness::Idle
                } else {
                    Readiness::Ready
                }
            }
            Err(RecvTimeoutError::Timeout) => Readiness::Idle,
            Err(RecvTimeoutError::Disconnected) => Readiness::Closed,
        }
    }

    fn drain(&mut self) -> Vec<RawEvent> {
        while let Ok(result) = self.rx.try_recv() {
            self.accept(result);
        }
        self.pending.drain(..).collect()
    }
}

/// Registered watches, indexed both ways
#[derive(Debug, Default)]
struct WatchTable {
    by_handle: HashMap<WatchHandle, (PathBuf, EventMask)>,
    by_path: HashMap<PathBuf, WatchHandle>,
    last: i32,
}

impl WatchTable {
    fn handle_of(&self, path: &Path) -> Option<WatchHandle> {
        self.by_path.get(path).copied()
    }

    fn register(&mut self, path: &Path, mask: EventMask) -> WatchHandle {
        self.last += 1;
        let handle = WatchHandle::new(self.last);
        self.by_handle.insert(handle, (path.to_path_buf(), mask));
        self.by_path.insert(path.to_path_buf(), handle);
        handle
    }

    fn forget(&mut self, path: &Path) -> Option<WatchHandle> {
        let handle = self.by_path.remove(path)?;
        self.by_handle.remove(&handle);
        Some(handle)
    }

    fn forget_handle(&mut self, handle: WatchHandle) -> Option<PathBuf> {
        let (path, _) = self.by_handle.remove(&handle)?;
        self.by_path.remove(&path);
        Some(path)
    }

    fn translate(&mut self, event: &Event) -> Vec<RawEvent> {
        let mut raw = Vec::new();
        if event.need_rescan() {
            raw.push(RawEvent::new(WatchHandle::UNKNOWN, EventMask::Q_OVERFLOW, ""));
        }

        let Some(path) = event.paths.first() else {
            return raw;
        };

        let mask = match event.kind {
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => EventMask::CLOSE_WRITE,
            EventKind::Access(AccessKind::Close(_)) => EventMask::CLOSE_NOWRITE,
            EventKind::Access(AccessKind::Open(_)) => EventMask::OPEN,
            EventKind::Access(_) => EventMask::ACCESS,
            EventKind::Create(kind) => {
                let is_dir = kind == CreateKind::Folder || (kind == CreateKind::Any && path.is_dir());
                with_dir_flag(EventMask::CREATE, is_dir)
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                with_dir_flag(EventMask::MOVED_FROM, self.by_path.contains_key(path))
            }
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
                with_dir_flag(EventMask::MOVED_TO, path.is_dir())
            }
            // From and To were already reported on their own.
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => return raw,
            EventKind::Modify(ModifyKind::Name(_)) => {
                if path.exists() {
                    with_dir_flag(EventMask::MOVED_TO, path.is_dir())
                } else {
                    EventMask::MOVED_FROM
                }
            }
            EventKind::Modify(ModifyKind::Metadata(_)) => EventMask::ATTRIB,
            EventKind::Modify(_) => EventMask::MODIFY,
            EventKind::Remove(kind) => {
                // The watched directory itself is gone: the kernel reports
                // DELETE_SELF followed by IGNORED and drops the watch.
                if let Some(handle) = self.forget(path) {
                    raw.push(RawEvent::new(handle, EventMask::DELETE_SELF, ""));
                    raw.push(RawEvent::new(handle, EventMask::IGNORED, ""));
                    return raw;
                }
                with_dir_flag(EventMask::DELETE, kind == RemoveKind::Folder)
            }
            EventKind::Any | EventKind::Other => return raw,
        };

        if let Some(child) = self.child_event(path, mask) {
            raw.push(child);
        }
        raw
    }

    /// Event about `path` reported through the watch on its parent directory
    fn child_event(&self, path: &Path, mask: EventMask) -> Option<RawEvent> {
        let name = path.file_name()?;
        let parent = path.parent()?;

        let (handle, registered) = match self.by_path.get(parent) {
            Some(handle) => (*handle, self.by_handle[handle].1),
            None => (WatchHandle::UNKNOWN, EventMask::WATCHED),
        };

        let reported = mask & (registered | EventMask::ALWAYS_REPORTED);
        if reported.difference(EventMask::ISDIR).is_empty() {
            return None;
        }

        Some(RawEvent::new(handle, reported, name))
    }
}

fn with_dir_flag(mask: EventMask, is_dir: bool) -> EventMask {
    if is_dir {
        mask | EventMask::ISDIR
    } else {
        mask
    }
}
