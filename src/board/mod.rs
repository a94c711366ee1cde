//! Board layout: the track and its shortcut links.

pub mod link;
pub mod track;

pub use link::{LinkSet, ShortcutLink, STANDARD_LINKS};
pub use track::{GridCell, Track, GRID_SIZE, TRACK_SIZE};
