//! Per-turn agent driver
//!
//! The [`Agent`] owns the shared game state and answers the collaborator
//! contract: it is constructed with the player's identity, asked to
//! [`Agent::decide`] once per own turn, and notified through
//! [`Agent::observe`] after every applied turn (including its own) in
//! strict turn order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Placement, PlayerColor};
use crate::config::{AlphaBetaConfig, MctsConfig};
use crate::generator::{legal_placements, opening_placement};
use crate::heuristics::mobility;
use crate::state::GameState;
use crate::strategy::{AlphaBeta, Greedy, Mcts, Strategy};
use crate::{EngineError, Result};

/// Which decision strategy the agent runs after its opening move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StrategyKind {
    /// One-ply greedy evaluation every turn.
    Greedy,
    /// Alpha-beta minimax every turn.
    AlphaBeta,
    /// Monte Carlo Tree Search every turn, with cross-turn tree reuse.
    Mcts,
    /// Greedy while the branching factor is high, alpha-beta once the
    /// candidate count drops below the configured threshold.
    Adaptive,
}

/// Agent construction options.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Strategy dispatch policy.
    pub strategy: StrategyKind,
    /// Alpha-beta knobs (also supplies the adaptive branching threshold).
    pub alpha_beta: AlphaBetaConfig,
    /// MCTS knobs.
    pub mcts: MctsConfig,
    /// Seed for the agent's own RNG (opening moves and fallbacks). `None`
    /// seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            strategy: StrategyKind::Adaptive,
            alpha_beta: AlphaBetaConfig::default(),
            mcts: MctsConfig::default(),
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Sets the strategy dispatch policy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the alpha-beta configuration.
    pub fn with_alpha_beta(mut self, config: AlphaBetaConfig) -> Self {
        self.alpha_beta = config;
        self
    }

    /// Sets the MCTS configuration.
    pub fn with_mcts(mut self, config: MctsConfig) -> Self {
        self.mcts = config;
        self
    }

    /// Sets a fixed RNG seed for openings and fallbacks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Outcome of a completed game from one player's perspective. Consumed by
/// batch harnesses for tallying; the engine itself never reads it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameOutcome {
    Win,
    Draw,
    Loss,
}

impl GameOutcome {
    /// Scores a finished game by final cell counts.
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => GameOutcome::Win,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
            std::cmp::Ordering::Less => GameOutcome::Loss,
        }
    }
}

/// A complete player: shared game state plus the configured strategies.
pub struct Agent {
    color: PlayerColor,
    game: GameState,
    config: AgentConfig,
    first_move: bool,
    greedy: Greedy,
    alpha_beta: AlphaBeta,
    mcts: Mcts,
    rng: StdRng,
}

impl Agent {
    /// Creates an agent playing `color` from an empty board.
    pub fn new(color: PlayerColor, config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // The adaptive policy runs alpha-beta only under the branching
        // threshold, where the mobility evaluator's generator passes stay
        // affordable.
        let alpha_beta = AlphaBeta::new(config.alpha_beta, mobility);
        let mcts = Mcts::new(GameState::new(), config.mcts.clone());

        Agent {
            color,
            game: GameState::new(),
            config,
            first_move: true,
            greedy: Greedy::default(),
            alpha_beta,
            mcts,
            rng,
        }
    }

    /// The player this agent controls.
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The agent's view of the shared game state.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Chooses a placement for the agent's turn.
    ///
    /// The agent's very first placement is an opening move (no owned anchor
    /// exists yet); afterwards the configured strategy decides. An
    /// inconclusive search falls back to a uniformly random legal placement;
    /// only a position with no legal placements at all is an error.
    pub fn decide(&mut self) -> Result<Placement> {
        if self.first_move {
            self.first_move = false;
            return opening_placement(&self.game.board, &mut self.rng)
                .ok_or(EngineError::NoLegalPlacements);
        }

        let chosen = match self.config.strategy {
            StrategyKind::Greedy => self.greedy.decide(&self.game, self.color),
            StrategyKind::AlphaBeta => self.alpha_beta.decide(&self.game, self.color),
            StrategyKind::Mcts => self.mcts.decide(&self.game, self.color),
            StrategyKind::Adaptive => {
                let branching = legal_placements(&self.game.board, self.color).len();
                if branching == 0 {
                    return Err(EngineError::NoLegalPlacements);
                }
                if branching < self.config.alpha_beta.branching_threshold {
                    self.alpha_beta.decide(&self.game, self.color)
                } else {
                    self.greedy.decide(&self.game, self.color)
                }
            }
        };

        match chosen {
            Ok(placement) => Ok(placement),
            Err(EngineError::NoDecision) => self.fallback(),
            Err(err) => Err(err),
        }
    }

    /// Advances the shared state after any applied turn, in strict turn
    /// order. Called exactly once per placement, for both players' moves.
    pub fn observe(&mut self, color: PlayerColor, placement: &Placement) -> Result<()> {
        self.game = self.game.advance(placement, color)?;
        if self.config.strategy == StrategyKind::Mcts {
            self.mcts.advance_root(&self.game);
        }
        Ok(())
    }

    /// Best-effort fallback when search is inconclusive: any legal
    /// placement, chosen uniformly.
    fn fallback(&mut self) -> Result<Placement> {
        let moves = legal_placements(&self.game.board, self.color);
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalPlacements)
    }
}
