//! The linear track laid over an 8×8 grid.
//!
//! The track is logically a line of 64 squares; indices double as
//! distance. Squares are labelled "1".."64" and laid out boustrophedon
//! from the bottom-left corner, so square 8 sits above square 7.

use serde::{Deserialize, Serialize};

/// Squares on the track.
pub const TRACK_SIZE: usize = 64;

/// Width and height of the board grid.
pub const GRID_SIZE: usize = 8;

/// Row/column of a square on the board grid.
///
/// Row 0 is the bottom row; column 0 is the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Immutable track description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    labels: Vec<String>,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    /// The standard 64-square track labelled "1".."64".
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: (1..=TRACK_SIZE).map(|n| n.to_string()).collect(),
        }
    }

    /// Number of squares.
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Index of the final square.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.size() - 1
    }

    /// Display label of a square, or `None` off the track.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// 1-based label number of a square.
    #[must_use]
    pub const fn label_number(index: usize) -> usize {
        index + 1
    }

    /// Whether `index` is the finishing square.
    #[must_use]
    pub fn is_final(&self, index: usize) -> bool {
        index == self.last_index()
    }

    /// Whether landing on `index` grants an extra roll: its label is a
    /// multiple of `interval` and it is not the finishing square.
    #[must_use]
    pub fn is_bonus(&self, index: usize, interval: usize) -> bool {
        interval != 0 && Self::label_number(index) % interval == 0 && !self.is_final(index)
    }

    /// Grid cell of a square (serpentine layout).
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<GridCell> {
        if index >= self.size() {
            return None;
        }
        let row = index / GRID_SIZE;
        let offset = index % GRID_SIZE;
        let col = if row % 2 == 0 {
            offset
        } else {
            GRID_SIZE - 1 - offset
        };
        Some(GridCell { row, col })
    }
}
