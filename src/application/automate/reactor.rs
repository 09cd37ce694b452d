//! Build Reactor
//!
//! Turns dispatched filesystem events into build actions and keeps the
//! directory watch set in step with the tree.

use std::path::Path;

use crate::domain::entities::DirectoryWatchSet;
use crate::domain::ports::{AutomatorEvent, WatchFacility};
use crate::domain::value_objects::WatchHandle;
use crate::error::PlaisioResult;
use crate::infrastructure::fs::list_directories;

use super::build::Builder;

/// State owned by one run of the watch loop
pub(super) struct Session<'a> {
    pub(super) build: Builder<'a>,
    pub(super) facility: &'a mut dyn WatchFacility,
    pub(super) watches: DirectoryWatchSet,
}

impl<'a> Session<'a> {
    pub(super) fn new(build: Builder<'a>, facility: &'a mut dyn WatchFacility) -> Self {
        Self {
            build,
            facility,
            watches: DirectoryWatchSet::new(),
        }
    }

    /// Watch `root` and every directory beneath it that is not watched yet
    ///
    /// A directory the facility refuses is reported and skipped; the rest of
    /// the tree is still watched.
    pub(super) fn watch_tree(&mut self, root: &Path) {
        let scan = list_directories(root);
        for message in scan.skipped {
            self.build.emit(AutomatorEvent::ScanSkipped { message });
        }
        for dir in &scan.paths {
            if let Err(err) = self.watch(dir) {
                self.build.emit(AutomatorEvent::ScanSkipped {
                    message: err.to_string(),
                });
            }
        }
    }

    fn watch(&mut self, dir: &Path) -> PlaisioResult<()> {
        if self.watches.contains_path(dir) {
            return Ok(());
        }
        let handle = self.watches.add(&mut *self.facility, dir)?;
        self.build.emit(AutomatorEvent::WatchingDirectory {
            path: dir.to_path_buf(),
            handle,
        });
        Ok(())
    }

    pub(super) fn on_write_complete(&mut self, path: &Path) -> PlaisioResult<()> {
        let extensions = &self.build.options.extensions;
        if extensions.is_source(path) {
            self.build.compile(path)?;
        }
        if extensions.is_output(path) && path.is_file() && extensions.source_for(path).is_file() {
            self.build.fix_output(path)?;
        }
        Ok(())
    }

    pub(super) fn on_moved_in(&mut self, path: &Path) -> PlaisioResult<()> {
        if path.is_dir() {
            if !self.watches.contains_path(path) {
                self.watch_tree(path);
            }
        } else if path.is_file() && self.build.options.extensions.is_source(path) {
            self.build.compile(path)?;
        }
        Ok(())
    }

    pub(super) fn on_created(&mut self, path: &Path) -> PlaisioResult<()> {
        if path.is_dir() {
            self.watch(path)?;
        }
        Ok(())
    }

    /// A moved-away directory takes its watched subtree with it
    pub(super) fn on_moved_out(&mut self, path: &Path) -> PlaisioResult<()> {
        for (handle, dir) in self.watches.remove_tree(&mut *self.facility, path) {
            self.build.emit(AutomatorEvent::StoppedWatching { path: dir, handle });
        }
        self.on_removed(path)
    }

    pub(super) fn on_removed(&mut self, path: &Path) -> PlaisioResult<()> {
        if self.build.options.extensions.is_source(path) {
            self.build.remove_artifacts(path)?;
        }
        Ok(())
    }

    pub(super) fn on_self_removed(&mut self, handle: WatchHandle) {
        if let Some(path) = self.watches.remove(handle) {
            self.build.emit(AutomatorEvent::StoppedWatching { path, handle });
        }
    }
}
