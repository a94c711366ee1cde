//! Deterministic random number generation for board setup and dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for the score table, link
//!   placement and dice, so adding a draw in one never shifts the others
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use snake_ladder::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! let mut dice = rng.for_context("dice");
//! let mut scores = rng.for_context("score_table");
//!
//! let face = dice.gen_range_inclusive(1..=6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same context, same sequence.
//! let mut again = GameRng::new(42).for_context("score_table");
//! assert_eq!(scores.gen_range_inclusive(1..=10), again.gen_range_inclusive(1..=10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

/// Deterministic RNG threaded explicitly through engine construction and rolls.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how far this RNG has already advanced. The context seed
    /// comes from `FxHasher`, whose output is fixed across toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given inclusive range.
    pub fn gen_index(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` is clamped to [0, 1].
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(
                rng1.gen_range_inclusive(1..=6),
                rng2.gen_range_inclusive(1..=6)
            );
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..16).map(|_| rng1.gen_range_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..16).map(|_| rng2.gen_range_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut dice = rng.for_context("dice");
        let mut links = rng.for_context("links");

        let seq1: Vec<_> = (0..16).map(|_| dice.gen_range_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..16).map(|_| links.gen_range_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_seed_is_pinned() {
        let mut hasher = FxHasher::default();
        42u64.hash(&mut hasher);
        "dice".hash(&mut hasher);

        let dice = GameRng::new(42).for_context("dice");
        assert_eq!(dice.seed(), hasher.finish());
        assert_eq!(GameRng::new(42).for_context("dice").seed(), dice.seed());
        assert_ne!(GameRng::new(42).for_context("links").seed(), dice.seed());
    }

    #[test]
    fn test_context_ignores_parent_progress() {
        let fresh = GameRng::new(7);
        let mut advanced = GameRng::new(7);
        for _ in 0..50 {
            advanced.gen_bool(0.5);
        }

        let mut a = fresh.for_context("score_table");
        let mut b = advanced.for_context("score_table");
        for _ in 0..10 {
            assert_eq!(a.gen_range_inclusive(1..=10), b.gen_range_inclusive(1..=10));
        }
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let mut rng = GameRng::new(3);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..500 {
            let v = rng.gen_range_inclusive(1..=6);
            assert!((1..=6).contains(&v));
            seen_low |= v == 1;
            seen_high |= v == 6;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(9);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
            // Out-of-range probabilities are clamped rather than panicking.
            assert!(rng.gen_bool(3.0));
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_index(0..=63);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(0..=63)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(0..=63)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
