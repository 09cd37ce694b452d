//! Directory watch set
//!
//! Owns the mapping from active watch handles to the directories they observe.
//! Entries are dropped when the facility reports that the watched directory
//! itself went away, or when a directory is moved out of the watched tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::WatchFacility;
use crate::domain::value_objects::{EventMask, WatchHandle};
use crate::error::PlaisioResult;

#[derive(Debug, Default)]
pub struct DirectoryWatchSet {
    directories: HashMap<WatchHandle, PathBuf>,
}

impl DirectoryWatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` with the facility under the automator's watch mask
    pub fn add(
        &mut self,
        facility: &mut dyn WatchFacility,
        path: &Path,
    ) -> PlaisioResult<WatchHandle> {
        let handle = facility.add_watch(path, EventMask::WATCHED)?;
        self.directories.insert(handle, path.to_path_buf());
        Ok(handle)
    }

    /// Drop a handle; returns the path it was watching
    pub fn remove(&mut self, handle: WatchHandle) -> Option<PathBuf> {
        self.directories.remove(&handle)
    }

    pub fn resolve(&self, handle: WatchHandle) -> Option<&Path> {
        self.directories.get(&handle).map(PathBuf::as_path)
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.directories.values().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Retire `path` and every watched directory below it
    ///
    /// Each handle is released with the facility. Returns the retired entries
    /// sorted by path.
    pub fn remove_tree(
        &mut self,
        facility: &mut dyn WatchFacility,
        path: &Path,
    ) -> Vec<(WatchHandle, PathBuf)> {
        let mut retired: Vec<(WatchHandle, PathBuf)> = self
            .directories
            .iter()
            .filter(|(_, dir)| dir.starts_with(path))
            .map(|(handle, dir)| (*handle, dir.clone()))
            .collect();
        retired.sort_by(|a, b| a.1.cmp(&b.1));

        for (handle, _) in &retired {
            self.directories.remove(handle);
            facility.remove_watch(*handle);
        }
        retired
    }
}
