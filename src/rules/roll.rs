//! Dice rolls and where they come from.
//!
//! The engine draws every roll through a [`RollSource`], so games can run
//! on seeded randomness ([`RandomRolls`]) or a fixed script
//! ([`ScriptedRolls`]) for replays and tests.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::{GameRng, GameRngState};

/// One dice draw: the face shown and the direction of travel.
///
/// Direction is drawn independently of the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    pub value: u32,
    pub forward: bool,
}

impl Roll {
    #[must_use]
    pub const fn forward(value: u32) -> Self {
        Self {
            value,
            forward: true,
        }
    }

    #[must_use]
    pub const fn backward(value: u32) -> Self {
        Self {
            value,
            forward: false,
        }
    }
}

/// Supplies rolls to the rules engine.
pub trait RollSource {
    /// Draw the next roll for a die with `sides` faces, moving forward
    /// with probability `forward_probability`.
    fn next_roll(&mut self, sides: u32, forward_probability: f64) -> Roll;

    /// Position of the underlying random stream, for sources that have one.
    fn checkpoint(&self) -> Option<GameRngState> {
        None
    }
}

/// Uniform face, Bernoulli direction, from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomRolls {
    rng: GameRng,
}

impl RandomRolls {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Continue a stream saved by [`RollSource::checkpoint`].
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self::new(GameRng::from_state(state))
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl RollSource for RandomRolls {
    fn next_roll(&mut self, sides: u32, forward_probability: f64) -> Roll {
        let value = self.rng.gen_range_inclusive(1..=sides.max(1));
        let forward = self.rng.gen_bool(forward_probability);
        Roll { value, forward }
    }

    fn checkpoint(&self) -> Option<GameRngState> {
        Some(self.rng.state())
    }
}

/// Replays a fixed list of rolls, cycling when exhausted.
///
/// Ignores the die shape and probability it is asked for.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    script: VecDeque<Roll>,
}

impl ScriptedRolls {
    /// Create from a non-empty script.
    pub fn new(script: impl IntoIterator<Item = Roll>) -> Self {
        let script: VecDeque<Roll> = script.into_iter().collect();
        assert!(!script.is_empty(), "Roll script must not be empty");
        Self { script }
    }

    /// Rolls still to come before the script wraps.
    #[must_use]
    pub fn upcoming(&self) -> impl Iterator<Item = &Roll> {
        self.script.iter()
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self, _sides: u32, _forward_probability: f64) -> Roll {
        let roll = self
            .script
            .pop_front()
            .expect("roll script is never empty");
        self.script.push_back(roll);
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_rolls_in_range() {
        let mut rolls = RandomRolls::new(GameRng::new(42));
        for _ in 0..200 {
            let roll = rolls.next_roll(6, 0.8);
            assert!((1..=6).contains(&roll.value));
        }
    }

    #[test]
    fn test_random_direction_frequency() {
        let mut rolls = RandomRolls::new(GameRng::new(5));
        let forward = (0..10_000).filter(|_| rolls.next_roll(6, 0.8).forward).count();
        // 0.8 * 10_000 with a generous tolerance.
        assert!((7_500..=8_500).contains(&forward), "forward = {forward}");
    }

    #[test]
    fn test_random_rolls_deterministic() {
        let mut a = RandomRolls::new(GameRng::new(11));
        let mut b = RandomRolls::new(GameRng::new(11));
        for _ in 0..50 {
            assert_eq!(a.next_roll(6, 0.8), b.next_roll(6, 0.8));
        }
    }

    #[test]
    fn test_scripted_rolls_cycle() {
        let mut rolls = ScriptedRolls::new([Roll::forward(3), Roll::backward(2)]);

        assert_eq!(rolls.next_roll(6, 0.8), Roll::forward(3));
        assert_eq!(rolls.next_roll(6, 0.8), Roll::backward(2));
        assert_eq!(rolls.next_roll(6, 0.8), Roll::forward(3));
        assert_eq!(rolls.upcoming().count(), 2);
    }

    #[test]
    fn test_single_roll_script_repeats() {
        let mut rolls = ScriptedRolls::new([Roll::backward(4)]);
        for _ in 0..5 {
            assert_eq!(rolls.next_roll(6, 0.8), Roll::backward(4));
        }
        assert_eq!(rolls.upcoming().count(), 1);
        assert_eq!(rolls.checkpoint(), None);
    }

    #[test]
    fn test_random_rolls_resume_from_checkpoint() {
        let mut rolls = RandomRolls::new(GameRng::new(23).for_context("dice"));
        for _ in 0..37 {
            rolls.next_roll(6, 0.8);
        }

        let mut resumed = RandomRolls::resume(&rolls.checkpoint().unwrap());
        for _ in 0..20 {
            assert_eq!(resumed.next_roll(6, 0.8), rolls.next_roll(6, 0.8));
        }
    }

    #[test]
    #[should_panic(expected = "Roll script must not be empty")]
    fn test_scripted_rolls_empty() {
        let _ = ScriptedRolls::new(Vec::new());
    }
}
