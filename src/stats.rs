//! Statistics collection for tree searches

use std::time::Duration;

/// Statistics collected during one MCTS training run.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of iterations performed.
    pub iterations: usize,

    /// Total time spent training.
    pub total_time: Duration,

    /// Number of nodes registered in the canonical table.
    pub tree_size: usize,

    /// Maximum selection depth reached.
    pub max_depth: usize,

    /// Expansions that landed on an already-registered node: the same board
    /// reached through a different move order.
    pub transposition_hits: usize,

    /// Whether training stopped early on the wall-clock budget.
    pub stopped_early: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object.
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1, // the root is always registered
            max_depth: 0,
            transposition_hits: 0,
            stopped_early: false,
        }
    }

    /// Average time per iteration in microseconds.
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Iterations per second.
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "MCTS training statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Transposition hits: {}\n\
             - Avg time per iteration: {:.3} µs\n\
             - Iterations per second: {:.1}\n\
             - Stopped early: {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.transposition_hits,
            self.avg_time_per_iteration_us(),
            self.iterations_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
