//! Scoring: square values, totals, session wins and the leaderboard.

pub mod engine;

pub use engine::{ScoreEngine, MAX_SQUARE_SCORE, MIN_SQUARE_SCORE};
