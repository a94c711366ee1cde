//! Shortcut links ("ladders").
//!
//! A link jumps a forward-moving player from `start` straight to `end`,
//! but only once that player's shortcut flag is unlocked. The set is fixed
//! for the lifetime of an engine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::track::TRACK_SIZE;
use crate::core::GameRng;

/// Directed jump between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutLink {
    pub start: usize,
    pub end: usize,
}

impl ShortcutLink {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// The four links every board has.
pub const STANDARD_LINKS: [ShortcutLink; 4] = [
    ShortcutLink::new(2, 21),
    ShortcutLink::new(6, 29),
    ShortcutLink::new(14, 55),
    ShortcutLink::new(35, 48),
];

/// Highest start square for the randomly placed link.
pub const RANDOM_LINK_MAX_START: usize = 49;

/// Span range of the randomly placed link.
pub const RANDOM_LINK_SPAN: std::ops::RangeInclusive<usize> = 3..=17;

/// Ordered, immutable set of links.
///
/// When several links share a start square, the first registered wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    links: Vec<ShortcutLink>,
}

impl LinkSet {
    /// Exactly the given links, in order.
    #[must_use]
    pub fn new(links: Vec<ShortcutLink>) -> Self {
        Self { links }
    }

    /// Standard links plus one random link drawn from `rng`.
    ///
    /// The random link starts in [0, 49] and spans 3..=17 squares, capped
    /// at the final square.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let start = rng.gen_index(0..=RANDOM_LINK_MAX_START);
        let end = (start + rng.gen_index(RANDOM_LINK_SPAN)).min(TRACK_SIZE - 1);

        let mut links = STANDARD_LINKS.to_vec();
        links.push(ShortcutLink::new(start, end));
        Self { links }
    }

    /// Destination of the first link starting at `square`.
    #[must_use]
    pub fn from_square(&self, square: usize) -> Option<usize> {
        self.links
            .iter()
            .find(|link| link.start == square)
            .map(|link| link.end)
    }

    /// Every square touched by a link.
    #[must_use]
    pub fn endpoints(&self) -> FxHashSet<usize> {
        self.links
            .iter()
            .flat_map(|link| [link.start, link.end])
            .collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ShortcutLink] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
