//! Watch Facility Implementations

mod notify_facility;

pub use notify_facility::NotifyFacility;
