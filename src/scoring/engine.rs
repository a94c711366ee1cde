//! Per-square point values, player totals and session win counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::TRACK_SIZE;
use crate::core::{GameRng, Player};

/// Lowest point value a square can carry.
pub const MIN_SQUARE_SCORE: u32 = 1;
/// Highest point value a square can carry.
pub const MAX_SQUARE_SCORE: u32 = 10;

/// Point table plus session bookkeeping.
///
/// The table is generated once at construction and survives every game
/// reset; only player totals are cleared between games. Win counts are
/// keyed by player name and last for the whole session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreEngine {
    table: Vec<u32>,
    session_wins: FxHashMap<String, u32>,
}

impl ScoreEngine {
    /// Build an engine with a freshly generated table.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut engine = Self {
            table: Vec::new(),
            session_wins: FxHashMap::default(),
        };
        engine.generate(rng);
        engine
    }

    /// Assign every square a uniform score in [1, 10].
    pub fn generate(&mut self, rng: &mut GameRng) {
        self.table = (0..TRACK_SIZE)
            .map(|_| rng.gen_range_inclusive(MIN_SQUARE_SCORE..=MAX_SQUARE_SCORE))
            .collect();
    }

    /// Points for landing on `position`; 1 off the track.
    #[must_use]
    pub fn score_of(&self, position: usize) -> u32 {
        self.table.get(position).copied().unwrap_or(MIN_SQUARE_SCORE)
    }

    /// The whole table, indexed by square.
    #[must_use]
    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Add the value of `position` to the player's total. Returns the
    /// points awarded.
    pub fn apply_landing(&self, player: &mut Player, position: usize) -> u32 {
        let points = self.score_of(position);
        player.add_score(points);
        points
    }

    /// Count a win for the player's name. Returns the new count.
    pub fn record_win(&mut self, player: &Player) -> u32 {
        let count = self
            .session_wins
            .entry(player.name().to_string())
            .or_insert(0);
        *count += 1;
        *count
    }

    /// Wins recorded this session under `name`.
    #[must_use]
    pub fn session_win_count(&self, name: &str) -> u32 {
        self.session_wins.get(name).copied().unwrap_or(0)
    }

    /// Zero every player's total. Leaves the table and win counts alone.
    pub fn reset_scores<'a>(&self, players: impl IntoIterator<Item = &'a mut Player>) {
        for player in players {
            player.reset_score();
        }
    }

    /// Players by total score, highest first; equal scores keep their
    /// input order.
    #[must_use]
    pub fn leaderboard<'a>(&self, players: impl IntoIterator<Item = &'a Player>) -> Vec<&'a Player> {
        let mut ranked: Vec<&Player> = players.into_iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
        ranked
    }
}
