//! Event mask value object
//!
//! Filesystem events are described by an inotify-style bitmask. The bit values
//! are an external wire format (they come from the kernel ABI) and are kept
//! verbatim, together with a read-only catalogue used for logging.

use serde::{Deserialize, Serialize};

/// Bitmask describing what happened to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventMask(u32);

impl EventMask {
    pub const EMPTY: EventMask = EventMask(0);
    pub const ACCESS: EventMask = EventMask(0x0000_0001);
    pub const MODIFY: EventMask = EventMask(0x0000_0002);
    pub const ATTRIB: EventMask = EventMask(0x0000_0004);
    pub const CLOSE_WRITE: EventMask = EventMask(0x0000_0008);
    pub const CLOSE_NOWRITE: EventMask = EventMask(0x0000_0010);
    pub const OPEN: EventMask = EventMask(0x0000_0020);
    pub const MOVED_FROM: EventMask = EventMask(0x0000_0040);
    pub const MOVED_TO: EventMask = EventMask(0x0000_0080);
    pub const CREATE: EventMask = EventMask(0x0000_0100);
    pub const DELETE: EventMask = EventMask(0x0000_0200);
    pub const DELETE_SELF: EventMask = EventMask(0x0000_0400);
    pub const MOVE_SELF: EventMask = EventMask(0x0000_0800);
    pub const UNMOUNT: EventMask = EventMask(0x0000_2000);
    pub const Q_OVERFLOW: EventMask = EventMask(0x0000_4000);
    pub const IGNORED: EventMask = EventMask(0x0000_8000);
    pub const ONLYDIR: EventMask = EventMask(0x0100_0000);
    pub const DONT_FOLLOW: EventMask = EventMask(0x0200_0000);
    pub const MASK_ADD: EventMask = EventMask(0x2000_0000);
    pub const ISDIR: EventMask = EventMask(0x4000_0000);
    pub const ONESHOT: EventMask = EventMask(0x8000_0000);

    pub const CLOSE: EventMask = EventMask(Self::CLOSE_WRITE.0 | Self::CLOSE_NOWRITE.0);
    pub const MOVE: EventMask = EventMask(Self::MOVED_FROM.0 | Self::MOVED_TO.0);
    pub const ALL_EVENTS: EventMask = EventMask(0x0000_0FFF);

    /// Events the automator registers for on every watched directory
    pub const WATCHED: EventMask = EventMask(
        Self::CLOSE_WRITE.0
            | Self::MOVED_TO.0
            | Self::MOVED_FROM.0
            | Self::CREATE.0
            | Self::DELETE.0
            | Self::DELETE_SELF.0,
    );

    /// Bits the kernel reports whether or not they were asked for
    pub const ALWAYS_REPORTED: EventMask =
        EventMask(Self::UNMOUNT.0 | Self::Q_OVERFLOW.0 | Self::IGNORED.0 | Self::ISDIR.0);

    pub const fn from_bits(bits: u32) -> Self {
        EventMask(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set
    pub const fn contains(self, other: EventMask) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// True when at least one bit of `other` is set
    pub const fn intersects(self, other: EventMask) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: EventMask) -> Self {
        EventMask(self.0 | other.0)
    }

    pub const fn intersection(self, other: EventMask) -> Self {
        EventMask(self.0 & other.0)
    }

    /// This mask with every bit of `other` cleared
    pub const fn difference(self, other: EventMask) -> Self {
        EventMask(self.0 & !other.0)
    }

    pub fn is_dir(self) -> bool {
        self.intersects(Self::ISDIR)
    }

    /// Catalogue entries for every single-bit flag set in this mask
    pub fn flags(self) -> impl Iterator<Item = &'static MaskInfo> {
        MASK_CATALOGUE
            .iter()
            .filter(move |info| info.is_single_flag() && self.contains(info.mask))
    }

    /// Symbolic names of the flags set, joined with `|`
    pub fn names(self) -> String {
        let names: Vec<&str> = self.flags().map(|info| info.name).collect();
        if names.is_empty() {
            "-".to_string()
        } else {
            names.join("|")
        }
    }
}

impl std::ops::BitOr for EventMask {
    type Output = EventMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for EventMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventMask {
    type Output = EventMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl std::fmt::Display for EventMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the mask catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskInfo {
    pub mask: EventMask,
    pub name: &'static str,
    pub description: &'static str,
}

impl MaskInfo {
    const fn new(mask: EventMask, name: &'static str, description: &'static str) -> Self {
        Self {
            mask,
            name,
            description,
        }
    }

    pub fn is_single_flag(&self) -> bool {
        self.mask.bits().is_power_of_two()
    }
}

/// Names and descriptions of every known mask value
pub const MASK_CATALOGUE: &[MaskInfo] = &[
    MaskInfo::new(EventMask::ACCESS, "IN_ACCESS", "File was accessed (read)"),
    MaskInfo::new(EventMask::MODIFY, "IN_MODIFY", "File was modified"),
    MaskInfo::new(
        EventMask::ATTRIB,
        "IN_ATTRIB",
        "Metadata changed (e.g. permissions, mtime, etc.)",
    ),
    MaskInfo::new(
        EventMask::CLOSE_WRITE,
        "IN_CLOSE_WRITE",
        "File opened for writing was closed",
    ),
    MaskInfo::new(
        EventMask::CLOSE_NOWRITE,
        "IN_CLOSE_NOWRITE",
        "File not opened for writing was closed",
    ),
    MaskInfo::new(EventMask::OPEN, "IN_OPEN", "File was opened"),
    MaskInfo::new(
        EventMask::MOVED_FROM,
        "IN_MOVED_FROM",
        "File moved out of watched directory",
    ),
    MaskInfo::new(
        EventMask::MOVED_TO,
        "IN_MOVED_TO",
        "File moved into watched directory",
    ),
    MaskInfo::new(
        EventMask::CREATE,
        "IN_CREATE",
        "File or directory created in watched directory",
    ),
    MaskInfo::new(
        EventMask::DELETE,
        "IN_DELETE",
        "File or directory deleted in watched directory",
    ),
    MaskInfo::new(
        EventMask::DELETE_SELF,
        "IN_DELETE_SELF",
        "Watched file or directory was deleted",
    ),
    MaskInfo::new(
        EventMask::MOVE_SELF,
        "IN_MOVE_SELF",
        "Watched file or directory was moved",
    ),
    MaskInfo::new(
        EventMask::CLOSE,
        "IN_CLOSE",
        "Equals to IN_CLOSE_WRITE | IN_CLOSE_NOWRITE",
    ),
    MaskInfo::new(
        EventMask::MOVE,
        "IN_MOVE",
        "Equals to IN_MOVED_FROM | IN_MOVED_TO",
    ),
    MaskInfo::new(
        EventMask::ALL_EVENTS,
        "IN_ALL_EVENTS",
        "Bitmask of all the above constants",
    ),
    MaskInfo::new(
        EventMask::UNMOUNT,
        "IN_UNMOUNT",
        "File system containing watched object was unmounted",
    ),
    MaskInfo::new(
        EventMask::Q_OVERFLOW,
        "IN_Q_OVERFLOW",
        "Event queue overflowed (watch handle is -1 for this event)",
    ),
    MaskInfo::new(
        EventMask::IGNORED,
        "IN_IGNORED",
        "Watch was removed (explicitly or because the file was removed or the filesystem unmounted)",
    ),
    MaskInfo::new(
        EventMask::ONLYDIR,
        "IN_ONLYDIR",
        "Only watch pathname if it is a directory",
    ),
    MaskInfo::new(
        EventMask::DONT_FOLLOW,
        "IN_DONT_FOLLOW",
        "Do not dereference pathname if it is a symlink",
    ),
    MaskInfo::new(
        EventMask::MASK_ADD,
        "IN_MASK_ADD",
        "Add events to watch mask for this pathname if it already exists",
    ),
    MaskInfo::new(
        EventMask::ISDIR,
        "IN_ISDIR",
        "Subject of this event is a directory",
    ),
    MaskInfo::new(
        EventMask::ONESHOT,
        "IN_ONESHOT",
        "Monitor pathname for one event, then remove from watch list",
    ),
];

/// Look up the catalogue entry for an exact mask value
pub fn describe(mask: EventMask) -> Option<&'static MaskInfo> {
    MASK_CATALOGUE.iter().find(|info| info.mask == mask)
}
