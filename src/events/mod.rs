//! Game events for presentation-side reactions.
//!
//! The engine appends an event for everything a front end might want to
//! react to (a dice sound, a win dialog, a highlight). Front ends drain the
//! log with [`RulesEngine::drain_events`](crate::rules::RulesEngine::drain_events)
//! and handle events however they like; the engine never waits on them.
//! An undrained log keeps only the newest
//! [`EVENT_LOG_CAPACITY`](crate::rules::engine::EVENT_LOG_CAPACITY) events.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A roll was accepted and planned.
    DiceRolled {
        player: PlayerId,
        value: u32,
        forward: bool,
        target: usize,
    },
    /// One animation step was applied.
    Stepped {
        player: PlayerId,
        from: usize,
        to: usize,
        backtrack: bool,
    },
    /// A move finished and scored.
    Landed {
        player: PlayerId,
        position: usize,
        points: u32,
        total: u32,
    },
    ShortcutUnlocked { player: PlayerId, position: usize },
    /// The player landed on a bonus square and rolls again.
    ExtraTurn { player: PlayerId, position: usize },
    TurnPassed { from: PlayerId, to: PlayerId },
    Won {
        player: PlayerId,
        name: String,
        score: u32,
        session_wins: u32,
    },
    /// Players were replaced for a new game.
    Reset { player_count: usize },
}

impl GameEvent {
    /// Player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::DiceRolled { player, .. }
            | GameEvent::Stepped { player, .. }
            | GameEvent::Landed { player, .. }
            | GameEvent::ShortcutUnlocked { player, .. }
            | GameEvent::ExtraTurn { player, .. }
            | GameEvent::Won { player, .. } => Some(*player),
            GameEvent::TurnPassed { from, .. } => Some(*from),
            GameEvent::Reset { .. } => None,
        }
    }
}
