//! Decision strategies
//!
//! Three interchangeable ways to pick a placement: one-ply greedy
//! evaluation, depth-bounded alpha-beta minimax, and Monte Carlo Tree
//! Search. All implement [`Strategy`], so the policy that picks between
//! them stays outside the engine.

pub mod greedy;
pub mod mcts;
pub mod minimax;

pub use greedy::Greedy;
pub use mcts::Mcts;
pub use minimax::AlphaBeta;

use crate::board::{Placement, PlayerColor};
use crate::state::GameState;
use crate::Result;

/// A decision strategy: given the current state, choose a placement for the
/// given player.
///
/// An inconclusive search reports [`crate::EngineError::NoDecision`] rather
/// than guessing; a state with no legal placements at all reports
/// [`crate::EngineError::NoLegalPlacements`]. Callers keep a fallback for
/// both.
pub trait Strategy {
    /// Chooses a placement for `perspective` from `state`.
    fn decide(&mut self, state: &GameState, perspective: PlayerColor) -> Result<Placement>;
}
