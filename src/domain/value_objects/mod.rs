//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact;
mod event_mask;
mod verbosity;
mod watch_event;

pub use artifact::ArtifactExtensions;
pub use event_mask::{describe, EventMask, MaskInfo, MASK_CATALOGUE};
pub use verbosity::{Level, Verbosity};
pub use watch_event::{RawEvent, WatchHandle};
