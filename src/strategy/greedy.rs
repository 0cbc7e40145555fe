//! One-ply greedy strategy

use crate::board::{Placement, PlayerColor};
use crate::generator::legal_placements;
use crate::heuristics::{self, Blend, Heuristic};
use crate::state::GameState;
use crate::strategy::Strategy;
use crate::{EngineError, Result};

/// Greedy one-ply lookahead: apply every legal placement to a scratch copy
/// of the state, score the result, keep the maximum.
///
/// Ties keep the first-seen candidate in generation order.
#[derive(Clone, Debug)]
pub struct Greedy {
    eval: Blend,
}

impl Greedy {
    /// Greedy search over the given blend of evaluators.
    pub fn new(eval: Blend) -> Self {
        Greedy { eval }
    }

    /// Greedy search over a single evaluator.
    pub fn over(heuristic: Heuristic) -> Self {
        Greedy {
            eval: Blend::single(heuristic),
        }
    }
}

impl Default for Greedy {
    /// The default blend weighs frontier suppression heavily and material
    /// lightly: one extra cell is worth an eighth of a frontier point.
    fn default() -> Self {
        Greedy {
            eval: Blend::new(vec![
                (heuristics::material as Heuristic, 0.125),
                (heuristics::frontier as Heuristic, 1.0),
            ]),
        }
    }
}

impl Strategy for Greedy {
    fn decide(&mut self, state: &GameState, perspective: PlayerColor) -> Result<Placement> {
        let moves = legal_placements(&state.board, perspective);
        if moves.is_empty() {
            return Err(EngineError::NoLegalPlacements);
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;
        for placement in moves {
            let next = state.child(&placement, perspective);
            let score = self.eval.score(&next, perspective);
            if score > best_score {
                best_score = score;
                best_move = Some(placement);
            }
        }

        best_move.ok_or(EngineError::NoDecision)
    }
}
