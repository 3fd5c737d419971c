use alloc::vec::Vec;
use log::{debug, trace};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    common::{EngineError, ShotMark},
    config::GameConfig,
    placement::place_fleets,
    state::State,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(usize),
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    pub fn winner(self) -> Option<usize> {
        match self {
            GameStatus::Won(p) => Some(p),
            GameStatus::InProgress => None,
        }
    }
}

/// Rules of the game applied to one owned [`State`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: State,
}

impl GameEngine {
    /// Validate `config` and place every player's fleet using `rng`.
    ///
    /// `config.seed` is not read here: placement draws only from `rng`. Use
    /// [`GameEngine::from_config`] to seed placement from the config.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        config.validate()?;
        let boards = place_fleets(config, rng)?;
        let state = State::from_boards(boards)?;
        debug!(
            "new game: {} players on {}x{}",
            config.n_players, config.rows, config.cols
        );
        Ok(Self { state })
    }

    /// Start a game whose placement is driven by a `SmallRng` seeded with
    /// `config.seed`.
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        Self::new(config, &mut rng)
    }

    /// Start a game whose placement is driven by a `SmallRng` seeded with `seed`.
    pub fn initialize(
        n_players: usize,
        rows: usize,
        cols: usize,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::from_config(&GameConfig::new(n_players, rows, cols, seed))
    }

    /// Continue a game from an existing state.
    pub fn from_state(state: State) -> Result<Self, EngineError> {
        state.validate()?;
        Ok(Self { state })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_state(self) -> State {
        self.state
    }

    pub fn n_players(&self) -> usize {
        self.state.n_players()
    }

    /// Every cell index against every opponent.
    pub fn action_space(&self) -> Vec<Vec<usize>> {
        GameConfig::new(self.n_players(), self.state.rows(), self.state.cols(), 0).action_space()
    }

    /// Shots `player` has fired so far, across all opponents.
    pub fn shots_taken(&self, player: usize) -> Result<usize, EngineError> {
        Ok(self.state.block(player)?.shots_taken())
    }

    /// Whose turn it is.
    ///
    /// Player 0 moves whenever everyone has fired the same number of shots,
    /// player 1 otherwise. This only describes alternation between two
    /// players, so larger games are rejected.
    pub fn current_player(&self) -> Result<usize, EngineError> {
        let n_players = self.n_players();
        if n_players != 2 {
            return Err(EngineError::UnsupportedTurnOrder { n_players });
        }
        let counts: Vec<usize> = self.state.blocks().iter().map(|b| b.shots_taken()).collect();
        let min = counts.iter().min().copied().unwrap_or(0);
        let max = counts.iter().max().copied().unwrap_or(0);
        Ok(if min == max { 0 } else { 1 })
    }

    /// Unshot cells per opponent of `player`, in row-major order.
    pub fn valid_actions(&self, player: usize) -> Result<Vec<Vec<usize>>, EngineError> {
        Ok(self
            .state
            .block(player)?
            .shots
            .iter()
            .map(|g| g.indices_where(|m| !m.is_shot()))
            .collect())
    }

    /// `true` if `player` has no shot left against some opponent. Informational
    /// only: running out of shots does not end the game.
    pub fn has_exhausted_opponent(&self, player: usize) -> Result<bool, EngineError> {
        Ok(self
            .state
            .block(player)?
            .shots
            .iter()
            .any(|g| g.iter().all(|m| m.is_shot())))
    }

    /// Fire one shot from `shooter` at `cell` of `opponent`'s grid.
    pub fn fire(
        &mut self,
        shooter: usize,
        opponent: usize,
        cell: usize,
    ) -> Result<ShotMark, EngineError> {
        self.check_shot(shooter, opponent, cell)?;
        let (shots, board) = self.state.pair_mut(shooter, opponent)?;
        let mark = board.receive_shot(cell)?;
        if let Some(slot) = shots.get_mut(cell) {
            *slot = mark;
        }
        trace!("player {} -> player {} cell {}: {:?}", shooter, opponent, cell, mark);
        Ok(mark)
    }

    /// Apply one action per opponent (in opponent order) for `player`.
    ///
    /// The whole action vector is checked before any grid changes, so a bad
    /// action leaves the state untouched.
    pub fn apply_action(&mut self, actions: &[usize], player: usize) -> Result<&State, EngineError> {
        if player >= self.n_players() {
            return Err(EngineError::InvalidPlayer {
                player,
                n_players: self.n_players(),
            });
        }
        let expected = self.n_players() - 1;
        if actions.len() != expected {
            return Err(EngineError::ActionCountMismatch {
                expected,
                got: actions.len(),
            });
        }
        let opponents: Vec<usize> = self.state.opponents(player).collect();
        for (&opponent, &cell) in opponents.iter().zip(actions) {
            self.check_shot(player, opponent, cell)?;
        }
        for (&opponent, &cell) in opponents.iter().zip(actions) {
            self.fire(player, opponent, cell)?;
        }
        Ok(&self.state)
    }

    /// Winner, if some player has sunk every ship of every opponent.
    ///
    /// Players are checked in index order and the first one whose opponents
    /// are all defeated wins.
    pub fn status(&self) -> GameStatus {
        for player in 0..self.n_players() {
            let all_defeated = self
                .state
                .opponents(player)
                .all(|o| self.state.blocks()[o].ownership.is_defeated());
            if all_defeated {
                return GameStatus::Won(player);
            }
        }
        GameStatus::InProgress
    }

    fn check_shot(&self, shooter: usize, opponent: usize, cell: usize) -> Result<(), EngineError> {
        let grid = self.state.shot_grid(shooter, opponent)?;
        match grid.get(cell) {
            None => Err(EngineError::CellOutOfRange {
                cell,
                cells: grid.len(),
            }),
            Some(mark) if mark.is_shot() => Err(EngineError::AlreadyShot {
                player: shooter,
                opponent,
                cell,
            }),
            Some(_) => Ok(()),
        }
    }
}
