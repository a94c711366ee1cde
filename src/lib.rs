//! # snake-ladder
//!
//! Rules engine for a snake-and-ladder style race on a 64-square track laid
//! over an 8×8 grid.
//!
//! ## Rules in brief
//!
//! - Each roll shows 1..=6 pips and, independently, moves forward with
//!   probability 0.8 or backward otherwise.
//! - Players keep their path as a stack: forward moves push squares,
//!   backward moves retrace them, never past the start square.
//! - Landing on a prime label after at least two rolls permanently unlocks
//!   shortcut links for that player.
//! - Landing on a label divisible by 5 (except the last square) grants
//!   another roll.
//! - Every landing scores the square's points; the first player on square 64
//!   wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows from one seed through
//!    explicit `GameRng` streams, so games replay exactly.
//!
//! 2. **Stepwise**: a roll only plans; `advance_step` applies one square per
//!    call so any timer or game loop can animate it.
//!
//! 3. **Read-only front ends**: presentation code reads `&Player`
//!    accessors, snapshots and drained events; it never mutates players.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `board`: Track layout and shortcut links
//! - `scoring`: Square values, totals, session wins, leaderboard
//! - `rules`: Rolls, move planning and the turn state machine
//! - `events`: Event log for presentation reactions
//! - `view`: Immutable snapshots
//! - `driver`: Headless game loop

pub mod core;
pub mod board;
pub mod scoring;
pub mod rules;
pub mod events;
pub mod view;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig,
    GameRng, GameRngState,
    Player, PlayerColor, PlayerId, PlayerMap,
};

pub use crate::board::{GridCell, LinkSet, ShortcutLink, Track, TRACK_SIZE};

pub use crate::scoring::ScoreEngine;

pub use crate::rules::{
    DiceOutcome, RollRejected, StepMove, StepOutcome, TurnEnd,
    RandomRolls, Roll, RollSource, ScriptedRolls,
    RulesEngine,
};

pub use crate::events::GameEvent;
pub use crate::view::{GameSnapshot, PlayerView};
pub use crate::driver::{DriverReport, TickDriver, TICK_INTERVAL};
