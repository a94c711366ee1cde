//! Results of the engine's entry points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::plan::PlanSteps;
use super::roll::Roll;
use crate::core::PlayerId;

/// Why a roll was refused. Refusals are part of normal play; nothing in
/// the engine changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RollRejected {
    #[error("game is over, {winner} already won")]
    GameOver { winner: PlayerId },
    #[error("{player} is still moving")]
    Animating { player: PlayerId },
}

/// A roll that was accepted and planned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceOutcome {
    pub player: PlayerId,
    pub roll: Roll,
    /// Destination of each animation tick.
    pub plan: PlanSteps,
    /// Where the player will end up; informational until the plan drains.
    pub target: usize,
}

/// One applied animation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMove {
    pub player: PlayerId,
    pub from: usize,
    pub to: usize,
    /// The step retreated one level on the path stack.
    pub backtrack: bool,
}

/// Post-move effects applied when a plan finished draining.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEnd {
    pub player: PlayerId,
    pub position: usize,
    pub points: u32,
    /// Shortcuts were unlocked by this landing.
    pub unlocked: bool,
    /// Landed on a bonus square; the same player rolls again.
    pub extra_turn: bool,
    pub winner: Option<PlayerId>,
    /// Whose turn it is now.
    pub next_player: PlayerId,
}

/// Result of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// A planned step was applied; keep ticking.
    Moved(StepMove),
    /// The plan was already empty; post-move effects were applied.
    Finished(TurnEnd),
    /// Nothing was in flight.
    Idle,
}

impl StepOutcome {
    /// True while the animation is still running.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Moved(_))
    }

    #[must_use]
    pub fn turn_end(&self) -> Option<&TurnEnd> {
        match self {
            StepOutcome::Finished(end) => Some(end),
            _ => None,
        }
    }
}
