//! Depth-bounded alpha-beta minimax strategy

use std::collections::HashMap;

use crate::board::{Placement, PlayerColor, MAX_TURNS};
use crate::config::AlphaBetaConfig;
use crate::generator::legal_placements;
use crate::heuristics::Heuristic;
use crate::state::GameState;
use crate::strategy::Strategy;
use crate::{EngineError, Result};

/// Sentinel score for a forced win. Strictly larger in magnitude than any
/// reachable heuristic value, so terminal outcomes dominate comparisons.
pub const WIN: f64 = 10_000.0;

/// Sentinel score for a forced loss.
pub const LOSS: f64 = -WIN;

/// A root search result: the chosen placement and its minimax value.
#[derive(Clone, Copy, Debug)]
pub struct ScoredPlacement {
    /// Minimax value of `placement` from the searching player's view.
    pub value: f64,
    /// The root move that achieves `value`.
    pub placement: Placement,
}

/// Counters for one search call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaBetaStats {
    /// States visited.
    pub nodes: u64,
    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,
    /// Move lists served from the memo instead of the generator.
    pub memo_hits: u64,
}

/// A score carrying the root move that led to it. Bounds and candidate
/// values travel through the search as one unit so the chosen move falls
/// out of the final bound.
#[derive(Clone, Copy, Debug)]
struct Scored {
    value: f64,
    placement: Option<Placement>,
}

/// Alpha-beta pruned minimax over a configurable heuristic.
///
/// Legal-move lists are memoized by canonical board and side to move; the
/// memo is retained across calls, trading memory for generator time when
/// later searches revisit earlier positions.
pub struct AlphaBeta {
    config: AlphaBetaConfig,
    heuristic: Heuristic,
    move_memo: HashMap<String, Vec<Placement>>,
    stats: AlphaBetaStats,
}

impl AlphaBeta {
    /// Creates a searcher with the given configuration and leaf evaluator.
    pub fn new(config: AlphaBetaConfig, heuristic: Heuristic) -> Self {
        AlphaBeta {
            config,
            heuristic,
            move_memo: HashMap::new(),
            stats: AlphaBetaStats::default(),
        }
    }

    /// Counters from the most recent [`AlphaBeta::search`] call.
    pub fn stats(&self) -> AlphaBetaStats {
        self.stats
    }

    /// Drops the move-list memo. The memo grows without bound over a long
    /// game; callers may evict between turns at the cost of regenerating
    /// any still-reachable entries.
    pub fn clear_memo(&mut self) {
        self.move_memo.clear();
    }

    /// Searches to the configured depth and returns the best root move with
    /// its value.
    ///
    /// Errors with [`EngineError::NoDecision`] when the configured depth is
    /// zero and [`EngineError::NoLegalPlacements`] when the side to move has
    /// no candidates at the root.
    pub fn search(
        &mut self,
        state: &GameState,
        perspective: PlayerColor,
    ) -> Result<ScoredPlacement> {
        debug_assert_eq!(
            state.current, perspective,
            "alpha-beta searches for the side to move"
        );
        if self.config.depth == 0 {
            return Err(EngineError::NoDecision);
        }
        self.stats = AlphaBetaStats::default();

        if self.memoized_moves(state).is_empty() {
            return Err(EngineError::NoLegalPlacements);
        }

        let alpha = Scored {
            value: f64::NEG_INFINITY,
            placement: None,
        };
        let beta = Scored {
            value: f64::INFINITY,
            placement: None,
        };
        let best = self.descend(true, state, None, perspective, self.config.depth, alpha, beta);

        match best.placement {
            Some(placement) => Ok(ScoredPlacement {
                value: best.value,
                placement,
            }),
            None => Err(EngineError::NoDecision),
        }
    }

    /// Recursive max/min alternation. `carried` is the root move this branch
    /// descends from (`None` at the root itself); every value bubbling up
    /// stays tagged with it.
    #[allow(clippy::too_many_arguments)]
    fn descend(
        &mut self,
        maximizing: bool,
        state: &GameState,
        carried: Option<Placement>,
        player: PlayerColor,
        depth: u32,
        mut alpha: Scored,
        mut beta: Scored,
    ) -> Scored {
        self.stats.nodes += 1;

        if depth == 0 {
            return Scored {
                value: (self.heuristic)(state, player),
                placement: carried,
            };
        }

        if state.turn > MAX_TURNS {
            // Past the final turn the game is scored by cell count for the
            // side to move.
            let side = state.current;
            let value = if state.count(side) > state.count(side.opponent()) {
                WIN
            } else {
                LOSS
            };
            return Scored {
                value,
                placement: carried,
            };
        }

        let moves = self.memoized_moves(state);

        if moves.is_empty() {
            // The side to move loses by exhaustion.
            let value = if state.current == player { LOSS } else { WIN };
            return Scored {
                value,
                placement: carried,
            };
        }

        // Failsafe against pathological branching: below the root, a move
        // list far past the threshold is not worth the subtree.
        let failsafe = self
            .config
            .failsafe_factor
            .saturating_mul(self.config.branching_threshold)
            .saturating_mul(depth as usize);
        if carried.is_some() && moves.len() > failsafe {
            return Scored {
                value: (self.heuristic)(state, player),
                placement: carried,
            };
        }

        for placement in moves {
            let next = state.child(&placement, state.current);
            let carried_next = carried.or(Some(placement));

            if maximizing {
                let candidate =
                    self.descend(false, &next, carried_next, player, depth - 1, alpha, beta);
                if candidate.value > alpha.value {
                    alpha = candidate;
                }
                if alpha.value >= beta.value {
                    self.stats.cutoffs += 1;
                    return beta;
                }
            } else {
                let candidate =
                    self.descend(true, &next, carried_next, player, depth - 1, alpha, beta);
                if candidate.value < beta.value {
                    beta = candidate;
                }
                if beta.value <= alpha.value {
                    self.stats.cutoffs += 1;
                    return alpha;
                }
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }

    /// Legal moves for the side to move, memoized by canonical board plus
    /// mover. A move list is a function of both: the same occupancy can
    /// recur with the other side to move.
    fn memoized_moves(&mut self, state: &GameState) -> Vec<Placement> {
        let key = format!("{}|{}", state.canonical_key(), state.current);
        if let Some(moves) = self.move_memo.get(&key) {
            self.stats.memo_hits += 1;
            return moves.clone();
        }
        let moves = legal_placements(&state.board, state.current);
        self.move_memo.insert(key, moves.clone());
        moves
    }
}

impl Strategy for AlphaBeta {
    fn decide(&mut self, state: &GameState, perspective: PlayerColor) -> Result<Placement> {
        self.search(state, perspective)
            .map(|scored| scored.placement)
    }
}
