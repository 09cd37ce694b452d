//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `DirectoryWatchSet` - active watch handles and the directories they observe

mod watch_set;

pub use watch_set::DirectoryWatchSet;
