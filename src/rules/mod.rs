//! Rules: rolls, move planning and the turn state machine.
//!
//! - `roll`: where dice come from (`RollSource`)
//! - `plan`: pure planning of a roll against a path stack
//! - `engine`: `RulesEngine`, the only place that mutates players
//! - `outcome`: what the entry points return

pub mod engine;
pub mod outcome;
pub mod plan;
pub mod roll;

pub use engine::RulesEngine;
pub use outcome::{DiceOutcome, RollRejected, StepMove, StepOutcome, TurnEnd};
pub use plan::{is_prime, plan_move, MovePlan, PlanSteps};
pub use roll::{RandomRolls, Roll, RollSource, ScriptedRolls};
