//! Board evaluation functions
//!
//! Every evaluator scores a state from one player's perspective; larger is
//! better for that player. Evaluators are plain functions so strategies can
//! take them as values, and [`Blend`] combines weighted evaluators without
//! touching evaluator code.

use std::collections::HashSet;

use crate::board::{Coord, PlayerColor};
use crate::generator::legal_placements;
use crate::state::GameState;

/// A board evaluator: `(state, perspective) -> score`, larger is better for
/// `perspective`.
pub type Heuristic = fn(&GameState, PlayerColor) -> f64;

/// Cell-count differential: own cells minus opponent cells.
pub fn material(state: &GameState, color: PlayerColor) -> f64 {
    f64::from(state.count(color)) - f64::from(state.count(color.opponent()))
}

/// Legal-move-count differential.
///
/// Runs the full generator once per player, which dominates everything else
/// an evaluation does; intended for positions where branching is already
/// small.
pub fn mobility(state: &GameState, color: PlayerColor) -> f64 {
    let own = legal_placements(&state.board, color).len();
    let opponent = legal_placements(&state.board, color.opponent()).len();
    own as f64 - opponent as f64
}

/// Frontier differential with the default weights: suffocating the opponent
/// counts ten times more than growing one's own liberties.
pub fn frontier(state: &GameState, color: PlayerColor) -> f64 {
    frontier_weighted(state, color, 0.1, 1.0)
}

/// Frontier differential: `own_weight * |own frontier| - opp_weight *
/// |opponent frontier|`, where a player's frontier is the set of distinct
/// empty cells orthogonally adjacent to cells they own.
pub fn frontier_weighted(
    state: &GameState,
    color: PlayerColor,
    own_weight: f64,
    opp_weight: f64,
) -> f64 {
    let mut own: HashSet<Coord> = HashSet::new();
    let mut opponent: HashSet<Coord> = HashSet::new();

    for (&coord, &owner) in &state.board {
        for neighbor in coord.neighbors() {
            if state.board.contains_key(&neighbor) {
                continue;
            }
            if owner == color {
                own.insert(neighbor);
            } else {
                opponent.insert(neighbor);
            }
        }
    }

    own_weight * own.len() as f64 - opp_weight * opponent.len() as f64
}

/// Weighted sum of evaluators.
#[derive(Clone, Debug)]
pub struct Blend {
    terms: Vec<(Heuristic, f64)>,
}

impl Blend {
    /// Builds a blend from `(evaluator, weight)` pairs.
    pub fn new(terms: Vec<(Heuristic, f64)>) -> Self {
        Blend { terms }
    }

    /// A blend of a single unweighted evaluator.
    pub fn single(heuristic: Heuristic) -> Self {
        Blend {
            terms: vec![(heuristic, 1.0)],
        }
    }

    /// Evaluates the weighted sum for `color`.
    pub fn score(&self, state: &GameState, color: PlayerColor) -> f64 {
        self.terms
            .iter()
            .map(|(heuristic, weight)| weight * heuristic(state, color))
            .sum()
    }
}
