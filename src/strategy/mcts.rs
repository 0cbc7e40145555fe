//! Monte Carlo Tree Search strategy
//!
//! The tree persists across turns in an arena of nodes keyed by the
//! canonical board serialization, so transpositions (the same board
//! reached through different move orders) collapse onto one node and pool
//! their statistics, and a new root after a real move inherits everything
//! earlier searches learned about its subtree.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Placement, PlayerColor, MAX_TURNS};
use crate::config::MctsConfig;
use crate::generator::legal_placements;
use crate::heuristics::material;
use crate::state::GameState;
use crate::stats::SearchStatistics;
use crate::strategy::Strategy;
use crate::{EngineError, Result};

/// One arena slot. Parent and children are arena indices, never owning
/// references, so shared reuse through the canonical table cannot form
/// ownership cycles. Child edges carry the placement that reaches them, so
/// a transposed node (which keeps the parent that first created it) still
/// yields a legal placement from every board it is reachable from.
struct Node {
    state: GameState,
    parent: Option<usize>,
    children: Option<Vec<(Placement, usize)>>,
    visits: u64,
    utility: f64,
}

/// Monte Carlo Tree Search with UCB1 selection and canonical-state node
/// reuse.
pub struct Mcts {
    config: MctsConfig,
    arena: Vec<Node>,
    index: HashMap<String, usize>,
    root: usize,
    rng: StdRng,
    statistics: SearchStatistics,
}

impl Mcts {
    /// Creates a searcher rooted at `initial`.
    pub fn new(initial: GameState, config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut mcts = Mcts {
            config,
            arena: Vec::new(),
            index: HashMap::new(),
            root: 0,
            rng,
            statistics: SearchStatistics::new(),
        };
        mcts.root = mcts.lookup_or_insert(initial, None);
        mcts
    }

    /// Runs the configured number of training iterations (selection,
    /// expansion, simulation, backpropagation), stopping early if the
    /// wall-clock budget expires between iterations.
    pub fn train(&mut self) {
        self.statistics = SearchStatistics::new();
        self.statistics.tree_size = self.arena.len();
        let start = Instant::now();

        for iteration in 0..self.config.max_iterations {
            if let Some(budget) = self.config.max_time {
                if start.elapsed() >= budget {
                    self.statistics.stopped_early = true;
                    debug!("training stopped early after {iteration} iterations");
                    break;
                }
            }

            let (leaf, depth) = self.select();
            self.statistics.max_depth = self.statistics.max_depth.max(depth);
            self.expand(leaf);

            let state = self.arena[leaf].state.clone();
            let outcome = self.rollout(&state);
            let reward = self.reward(outcome);
            self.backpropagate(leaf, reward);

            self.statistics.iterations = iteration + 1;
        }

        self.statistics.total_time = start.elapsed();
        self.statistics.tree_size = self.arena.len();
    }

    /// Re-keys the root after the real game advanced one ply. A board the
    /// tree has already explored keeps its accumulated statistics.
    pub fn advance_root(&mut self, state: &GameState) {
        let key = state.canonical_key();
        if let Some(&existing) = self.index.get(&key) {
            debug!(
                "root carry-over: reusing node with {} visits",
                self.arena[existing].visits
            );
            self.root = existing;
        } else {
            self.root = self.lookup_or_insert(state.clone(), None);
        }
    }

    /// The root child with the highest visit count.
    ///
    /// Visit count, not average utility, is the variance-robust choice
    /// signal. Unvisited children are ineligible; an untrained root yields
    /// [`EngineError::NoDecision`].
    pub fn best_placement(&self) -> Result<Placement> {
        let children = match &self.arena[self.root].children {
            Some(children) => children,
            None => return Err(EngineError::NoDecision),
        };
        if children.is_empty() {
            return Err(EngineError::NoLegalPlacements);
        }

        let mut best_visits = 0;
        let mut best = None;
        for &(placement, child) in children {
            let visits = self.arena[child].visits;
            if visits > best_visits {
                best_visits = visits;
                best = Some(placement);
            }
        }

        best.ok_or(EngineError::NoDecision)
    }

    /// Placements and visit counts of the root's children; empty if the
    /// root has not been expanded.
    pub fn root_children(&self) -> Vec<(Placement, u64)> {
        match &self.arena[self.root].children {
            Some(children) => children
                .iter()
                .map(|&(placement, child)| (placement, self.arena[child].visits))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Visit count and accumulated utility of the node holding the given
    /// board occupancy, if it has ever been registered.
    pub fn node_stats(&self, state: &GameState) -> Option<(u64, f64)> {
        let idx = *self.index.get(&state.canonical_key())?;
        let node = &self.arena[idx];
        Some((node.visits, node.utility))
    }

    /// Statistics from the most recent [`Mcts::train`] call.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Finds the arena slot for a board occupancy, creating and registering
    /// a fresh node if the canonical table has never seen it. An existing
    /// node is returned as-is: its first parent and statistics are kept.
    fn lookup_or_insert(&mut self, state: GameState, parent: Option<usize>) -> usize {
        let key = state.canonical_key();
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }

        let idx = self.arena.len();
        self.arena.push(Node {
            state,
            parent,
            children: None,
            visits: 0,
            utility: 0.0,
        });
        self.index.insert(key, idx);
        idx
    }

    /// Selection phase: walk down from the root while every child of the
    /// current node has itself been expanded, descending by UCB1; stop at
    /// the first unexpanded node (the walked-to node itself, or one of its
    /// children). Returns the node and its walk depth.
    fn select(&self) -> (usize, usize) {
        let mut current = self.root;
        let mut depth = 0;

        loop {
            match &self.arena[current].children {
                None => return (current, depth),
                Some(children) if children.is_empty() => return (current, depth),
                Some(children) => {
                    if let Some(&(_, unexpanded)) = children
                        .iter()
                        .find(|&&(_, child)| self.arena[child].children.is_none())
                    {
                        return (unexpanded, depth + 1);
                    }

                    // A walk longer than the turn cap has revisited a board
                    // through the canonical table; stop rather than cycle.
                    if depth > MAX_TURNS as usize {
                        return (current, depth);
                    }

                    current = self.best_ucb1_child(children);
                    depth += 1;
                }
            }
        }
    }

    /// Expansion phase: materialize the full child set, registering each
    /// child through the canonical table so transpositions reuse existing
    /// nodes and their statistics.
    fn expand(&mut self, idx: usize) {
        if self.arena[idx].children.is_some() {
            return;
        }

        let state = self.arena[idx].state.clone();
        let moves = legal_placements(&state.board, state.current);

        let mut children = Vec::with_capacity(moves.len());
        for placement in moves {
            let child_state = state.child(&placement, state.current);
            let registered = self.arena.len();
            let child = self.lookup_or_insert(child_state, Some(idx));
            if child < registered {
                self.statistics.transposition_hits += 1;
            }
            children.push((placement, child));
        }

        self.arena[idx].children = Some(children);
    }

    /// Simulation phase: uniformly random descent on owned state copies,
    /// never materializing nodes, until the turn cap (material differential
    /// clamped to [-1, 1] from the mover's perspective) or exhaustion (-1,
    /// the side to move loses). The sign flips at each level so the returned
    /// value is always relative to the state passed in.
    fn rollout(&mut self, state: &GameState) -> f64 {
        if state.turn >= MAX_TURNS {
            return material(state, state.current).clamp(-1.0, 1.0);
        }

        let moves = legal_placements(&state.board, state.current);
        if moves.is_empty() {
            return -1.0;
        }

        let placement = moves[self.rng.gen_range(0..moves.len())];
        let next = state.child(&placement, state.current);
        -self.rollout(&next)
    }

    /// Backpropagation phase: add the reward at the expanded node and walk
    /// the parent chain to the root, inverting the reward at each step.
    fn backpropagate(&mut self, idx: usize, reward: f64) {
        let mut current = Some(idx);
        let mut value = reward;

        while let Some(node_idx) = current {
            let node = &mut self.arena[node_idx];
            node.visits += 1;
            node.utility += value;
            value = 1.0 - value;
            current = node.parent;
        }
    }

    /// Maps a rollout outcome in [-1, 1] to a backpropagation reward: wins
    /// are 1, losses 0, and draws follow the configured policy.
    fn reward(&self, outcome: f64) -> f64 {
        if outcome > 0.0 {
            1.0
        } else if outcome < 0.0 {
            0.0
        } else if self.config.draw_is_win {
            1.0
        } else {
            0.0
        }
    }

    /// UCB1 over the children; a child that has never been visited is
    /// treated as infinitely attractive, so every child is tried once
    /// before exploitation begins.
    fn best_ucb1_child(&self, children: &[(Placement, usize)]) -> usize {
        let mut best_value = f64::NEG_INFINITY;
        let mut best = children[0].1;

        for &(_, child) in children {
            let value = self.ucb1(child);
            if value > best_value {
                best_value = value;
                best = child;
            }
        }

        best
    }

    /// `U/N + c * sqrt(ln(N) / N)` over the child's own visit count.
    fn ucb1(&self, idx: usize) -> f64 {
        let node = &self.arena[idx];
        if node.visits == 0 {
            return f64::INFINITY;
        }

        let visits = node.visits as f64;
        let exploitation = node.utility / visits;
        let exploration = self.config.exploration_constant * (visits.ln() / visits).sqrt();
        exploitation + exploration
    }
}

impl Strategy for Mcts {
    fn decide(&mut self, state: &GameState, perspective: PlayerColor) -> Result<Placement> {
        debug_assert_eq!(
            state.current, perspective,
            "MCTS decides for the side to move"
        );
        self.advance_root(state);
        self.train();
        self.best_placement()
    }
}
