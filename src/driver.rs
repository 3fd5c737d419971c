#![cfg(feature = "std")]

//! Game driver: asks the engine whose turn it is, lets a [`Policy`] pick one
//! shot per opponent, applies it and checks for a winner.

use anyhow::{anyhow, bail};
use log::{debug, info, warn};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::{common::EngineError, config::GameConfig, game::GameEngine, GameStatus};

/// Placement runs tried per game before giving up on a configuration.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 16;

/// Engine seeds drawn by [`run_series`] come from `0..ENGINE_SEED_RANGE`.
pub const ENGINE_SEED_RANGE: u64 = 10_000;

/// Chooses the next shots for a player.
pub trait Policy {
    /// Pick one cell per opponent from `valid`. Returns `None` when some
    /// opponent has no legal cell left.
    fn select_actions(&mut self, rng: &mut SmallRng, valid: &[Vec<usize>]) -> Option<Vec<usize>>;
}

/// Uniformly random legal shot against each opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn select_actions(&mut self, rng: &mut SmallRng, valid: &[Vec<usize>]) -> Option<Vec<usize>> {
        valid.iter().map(|cells| cells.choose(rng).copied()).collect()
    }
}

/// Lowest-index legal shot against each opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstValidPolicy;

impl Policy for FirstValidPolicy {
    fn select_actions(&mut self, _rng: &mut SmallRng, valid: &[Vec<usize>]) -> Option<Vec<usize>> {
        valid.iter().map(|cells| cells.first().copied()).collect()
    }
}

/// Result of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    /// Seed used for fleet placement, when known.
    pub seed: Option<u64>,
    pub winner: usize,
    /// Turns played.
    pub steps: usize,
    /// Shots fired by each player.
    pub shots: Vec<usize>,
}

/// Play `engine` to the end.
pub fn play_game(
    engine: &mut GameEngine,
    policy: &mut dyn Policy,
    rng: &mut SmallRng,
) -> anyhow::Result<GameSummary> {
    let step_limit = engine.state().cells() * engine.n_players();
    let mut steps = 0;
    loop {
        if steps >= step_limit {
            bail!("game did not finish within {} turns", step_limit);
        }
        let player = engine.current_player()?;
        let valid = engine.valid_actions(player)?;
        let actions = policy
            .select_actions(rng, &valid)
            .ok_or_else(|| anyhow!("player {} has no shots left", player))?;
        engine.apply_action(&actions, player)?;
        steps += 1;

        if let GameStatus::Won(winner) = engine.status() {
            let shots = (0..engine.n_players())
                .map(|p| engine.shots_taken(p))
                .collect::<Result<Vec<_>, _>>()?;
            debug!("game over: player {} wins after {} turns", winner, steps);
            return Ok(GameSummary {
                seed: None,
                winner,
                steps,
                shots,
            });
        }
    }
}

/// Play `games` games back to back.
///
/// Every game gets a fresh engine seeded from the driver RNG. A game whose
/// fleet cannot be placed is re-seeded, up to [`MAX_PLACEMENT_ATTEMPTS`] times.
pub fn run_series(
    config: &GameConfig,
    games: usize,
    policy: &mut dyn Policy,
    driver_seed: u64,
) -> anyhow::Result<Vec<GameSummary>> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(driver_seed);
    let mut summaries = Vec::with_capacity(games);

    for game in 0..games {
        let (mut engine, seed) = new_engine(config, &mut rng)?;
        let mut summary = play_game(&mut engine, policy, &mut rng)?;
        summary.seed = Some(seed);
        info!(
            "game {} over in {} turns, winner {}",
            game, summary.steps, summary.winner
        );
        summaries.push(summary);
    }
    Ok(summaries)
}

fn new_engine(config: &GameConfig, rng: &mut SmallRng) -> anyhow::Result<(GameEngine, u64)> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let seed = rng.random_range(0..ENGINE_SEED_RANGE);
        match GameEngine::from_config(&config.with_seed(seed)) {
            Ok(engine) => return Ok((engine, seed)),
            Err(err @ EngineError::PlacementFailed { .. }) => {
                warn!("attempt {}: {} (seed {}), re-seeding", attempt, err, seed);
            }
            Err(err) => return Err(err.into()),
        }
    }
    bail!(
        "could not place fleets on a {}x{} grid after {} attempts",
        config.rows,
        config.cols,
        MAX_PLACEMENT_ATTEMPTS
    )
}
