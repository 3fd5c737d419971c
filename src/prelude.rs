//! Commonly used types and utilities for ease of import.

pub use crate::{EngineError, GameConfig, GameEngine, GameStatus, ShipKind, ShotMark, State};

#[cfg(feature = "std")]
pub use crate::driver::{play_game, run_series, FirstValidPolicy, GameSummary, Policy, RandomPolicy};
