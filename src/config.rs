//! Configuration options for the search strategies
//!
//! Builder-style structs with documented defaults; every knob can be set
//! independently via a `with_*` method.

use std::time::Duration;

/// Configuration for the Monte Carlo Tree Search strategy.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant for UCB1.
    ///
    /// Higher values favor exploration of less-visited nodes. The standard
    /// value is sqrt(2) ≈ 1.414.
    pub exploration_constant: f64,

    /// Training iterations per decision.
    pub max_iterations: usize,

    /// Optional wall-clock budget, checked between iterations. When it
    /// expires the search returns the best move found so far instead of
    /// finishing the iteration budget.
    pub max_time: Option<Duration>,

    /// Whether a drawn rollout counts as a win during backpropagation.
    ///
    /// The classic mapping here rewards any non-loss, which biases the
    /// search toward draws; it is exposed as a switch rather than baked in.
    pub draw_is_win: bool,

    /// Seed for the rollout RNG. `None` seeds from entropy; a fixed value
    /// makes training fully reproducible.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            exploration_constant: 1.414, // sqrt(2)
            max_iterations: 1_000,
            max_time: None,
            draw_is_win: true,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Sets the exploration constant.
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the training iteration budget.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets whether drawn rollouts propagate as wins.
    pub fn with_draw_is_win(mut self, draw_is_win: bool) -> Self {
        self.draw_is_win = draw_is_win;
        self
    }

    /// Sets a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for the alpha-beta minimax strategy.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaConfig {
    /// Search depth in plies. A depth of zero yields no decision.
    pub depth: u32,

    /// Branching factor below which adaptive agents switch from greedy
    /// evaluation to full alpha-beta search.
    pub branching_threshold: usize,

    /// Failsafe multiplier: a non-root move list longer than
    /// `failsafe_factor * branching_threshold * depth_remaining` is not
    /// searched; the static heuristic stands in for the subtree, bounding
    /// worst-case latency against pathological branching.
    pub failsafe_factor: usize,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        AlphaBetaConfig {
            depth: 3,
            branching_threshold: 15,
            failsafe_factor: 5,
        }
    }
}

impl AlphaBetaConfig {
    /// Sets the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the adaptive branching threshold.
    pub fn with_branching_threshold(mut self, threshold: usize) -> Self {
        self.branching_threshold = threshold;
        self
    }

    /// Sets the failsafe multiplier.
    pub fn with_failsafe_factor(mut self, factor: usize) -> Self {
        self.failsafe_factor = factor;
        self
    }
}
