//! Game configuration.
//!
//! A `GameConfig` fixes everything that stays constant for the lifetime of
//! one engine: the master seed, dice shape, the shortcut links and the
//! bonus/unlock thresholds. Only the player count changes between games
//! (see [`RulesEngine::reset_game`](crate::rules::RulesEngine::reset_game)).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{ShortcutLink, TRACK_SIZE};

/// Maximum supported players.
pub const MAX_PLAYERS: usize = 255;

/// Invalid configuration, detected at engine construction or reset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("player count {0} is outside 1..={}", MAX_PLAYERS)]
    PlayerCount(usize),
    #[error("forward probability must be within [0, 1], got {0}")]
    ForwardProbability(f64),
    #[error("dice must have at least one side")]
    DiceSides,
    #[error("bonus interval must be non-zero")]
    BonusInterval,
    #[error("shortcut link {start}->{end} leaves the track (squares 0..{})", TRACK_SIZE)]
    LinkOffTrack { start: usize, end: usize },
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players in the first game (1-255).
    pub player_count: usize,

    /// Master seed. Score table, link placement and dice each draw from
    /// an independent stream derived from it.
    pub seed: u64,

    /// Probability that a roll moves forward.
    ///
    /// Drawn independently of the dice face.
    pub forward_probability: f64,

    /// Number of faces on the die (faces are 1..=sides).
    pub dice_sides: u32,

    /// Explicit shortcut links. `None` uses the standard four plus one
    /// randomly placed link.
    pub links: Option<Vec<ShortcutLink>>,

    /// Landing on a label divisible by this grants another roll.
    pub bonus_interval: usize,

    /// Rolls a player must have taken before a prime label unlocks
    /// shortcuts.
    pub unlock_min_rolls: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 42,
            forward_probability: 0.8,
            dice_sides: 6,
            links: None,
            bonus_interval: 5,
            unlock_min_rolls: 2,
        }
    }
}

impl GameConfig {
    /// Create a default configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_forward_probability(mut self, probability: f64) -> Self {
        self.forward_probability = probability;
        self
    }

    #[must_use]
    pub fn with_dice_sides(mut self, sides: u32) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Use exactly these links instead of the standard layout.
    #[must_use]
    pub fn with_links(mut self, links: Vec<ShortcutLink>) -> Self {
        self.links = Some(links);
        self
    }

    #[must_use]
    pub fn with_bonus_interval(mut self, interval: usize) -> Self {
        self.bonus_interval = interval;
        self
    }

    #[must_use]
    pub fn with_unlock_min_rolls(mut self, rolls: u32) -> Self {
        self.unlock_min_rolls = rolls;
        self
    }

    /// Check that a player count is usable.
    pub fn validate_player_count(player_count: usize) -> Result<(), ConfigError> {
        if player_count == 0 || player_count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(player_count));
        }
        Ok(())
    }

    /// Validate every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_player_count(self.player_count)?;

        if !(0.0..=1.0).contains(&self.forward_probability) {
            return Err(ConfigError::ForwardProbability(self.forward_probability));
        }
        if self.dice_sides == 0 {
            return Err(ConfigError::DiceSides);
        }
        if self.bonus_interval == 0 {
            return Err(ConfigError::BonusInterval);
        }
        if let Some(links) = &self.links {
            if let Some(bad) = links
                .iter()
                .find(|l| l.start >= TRACK_SIZE || l.end >= TRACK_SIZE)
            {
                return Err(ConfigError::LinkOffTrack {
                    start: bad.start,
                    end: bad.end,
                });
            }
        }
        Ok(())
    }
}
