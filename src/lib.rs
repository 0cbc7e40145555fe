//! # tessera
//!
//! The decision-making core of an autonomous player for a two-player,
//! turn-based tile-placement game on a toroidal board. Each turn a player
//! places a tetromino (four connected cells) adjacent to one of their
//! existing cells; rows and columns that fill up are cleared.
//!
//! The crate provides the board/state model, the legal-move generator, a
//! set of heuristic evaluators, and three interchangeable decision
//! strategies:
//!
//! - **Greedy**: one-ply lookahead with heuristic scoring
//! - **Alpha-beta minimax**: depth-bounded adversarial search with pruning,
//!   move-list memoization, and a branching failsafe
//! - **MCTS**: Monte Carlo Tree Search with UCB1 selection and
//!   canonical-state node reuse across turns
//!
//! Rule adjudication, I/O, and game orchestration live outside the crate;
//! an [`Agent`] answers the collaborator contract (construct with a color,
//! `decide` once per own turn, `observe` every applied turn).
//!
//! ## Basic Usage
//!
//! ```
//! use tessera::{Agent, AgentConfig, PlayerColor};
//!
//! fn main() -> Result<(), tessera::EngineError> {
//!     let mut red = Agent::new(PlayerColor::Red, AgentConfig::default());
//!     let mut blue = Agent::new(PlayerColor::Blue, AgentConfig::default());
//!
//!     // Red opens; both agents observe the applied move.
//!     let placement = red.decide()?;
//!     red.observe(PlayerColor::Red, &placement)?;
//!     blue.observe(PlayerColor::Red, &placement)?;
//!
//!     println!("Red opened with {placement}");
//!     Ok(())
//! }
//! ```
//!
//! ## How a decision is made
//!
//! Data flows one direction per turn: the current [`GameState`] feeds the
//! move generator, which enumerates candidate placements by growing free
//! tetrominoes outward from the player's cells; the selected strategy
//! consumes candidates plus heuristics and returns a single placement; the
//! collaborator applies it and reports the opponent's reply back through
//! [`Agent::observe`].
//!
//! Strategies never mutate a state in place: every transition produces a
//! new snapshot, so search trees can hold many branches over shared
//! history. MCTS keys its tree by the canonical board serialization, so
//! transpositions collapse to one node and statistics survive from turn to
//! turn.

pub mod agent;
pub mod board;
pub mod config;
pub mod generator;
pub mod heuristics;
pub mod state;
pub mod stats;
pub mod strategy;

pub use agent::{Agent, AgentConfig, GameOutcome, StrategyKind};
pub use board::{Board, Coord, Direction, Placement, PlayerColor, BOARD_N, MAX_TURNS};
pub use config::{AlphaBetaConfig, MctsConfig};
pub use state::GameState;
pub use stats::SearchStatistics;
pub use strategy::{AlphaBeta, Greedy, Mcts, Strategy};

/// Error types for the engine
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The side to move has no legal placements.
    #[error("no legal placements available from current state")]
    NoLegalPlacements,

    /// Search was inconclusive (zero depth, zero iterations, or an
    /// untrained tree); distinct from a position with no moves. The caller
    /// decides the fallback.
    #[error("search produced no decision")]
    NoDecision,

    /// A placement was applied out of turn order.
    #[error("placement by {0} applied out of turn")]
    OutOfTurn(PlayerColor),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
