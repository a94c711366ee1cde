//! Core engine types: players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS};
pub use player::{Player, PlayerColor, PlayerId, PlayerMap, PLAYER_PALETTE};
pub use rng::{GameRng, GameRngState};
