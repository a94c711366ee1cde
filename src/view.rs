//! Read-only views of engine state for front ends.
//!
//! A [`GameSnapshot`] is a value copy: holding one never blocks the engine
//! and mutating one never reaches it. Paths are `im::Vector`s, so copying
//! a player's history out of the engine is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{ShortcutLink, Track};
use crate::core::{GameRngState, Player, PlayerColor, PlayerId};
use crate::rules::Roll;

/// Everything a front end shows about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: PlayerColor,
    pub position: usize,
    pub path: Vector<usize>,
    /// Animation steps still to apply.
    pub pending_steps: usize,
    pub roll_count: u32,
    pub shortcut_unlocked: bool,
    pub total_score: u32,
}

impl PlayerView {
    /// Label of the square the player stands on.
    #[must_use]
    pub fn label(&self) -> String {
        Track::label_number(self.position).to_string()
    }
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            color: player.color(),
            position: player.position(),
            path: player.path().clone(),
            pending_steps: player.planned_path().len(),
            roll_count: player.roll_count(),
            shortcut_unlocked: player.shortcut_unlocked(),
            total_score: player.total_score(),
        }
    }
}

/// Frame-sized copy of the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// In player order.
    pub players: Vec<PlayerView>,
    /// Current player first.
    pub turn_order: Vec<PlayerId>,
    pub last_roll: Option<Roll>,
    pub animating: bool,
    pub winner: Option<PlayerId>,
    pub links: Vec<ShortcutLink>,
    /// Point value of each square.
    pub square_scores: Vec<u32>,
    /// Player ids by score, as ranked by the engine's leaderboard.
    pub ranking: Vec<PlayerId>,
    /// Dice stream position, when the dice are random. Feed it to
    /// [`RandomRolls::resume`](crate::rules::RandomRolls::resume) to continue
    /// the same rolls elsewhere.
    pub dice: Option<GameRngState>,
}

impl GameSnapshot {
    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerView> {
        let id = self.turn_order.first()?;
        self.players.iter().find(|p| p.id == *id)
    }

    /// Player views in [`ranking`](Self::ranking) order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&PlayerView> {
        self.ranking
            .iter()
            .filter_map(|id| self.players.get(id.index()))
            .collect()
    }

    /// Compact binary encoding, e.g. for handing a frame to another thread
    /// or process.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
