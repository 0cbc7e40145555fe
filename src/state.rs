//! Game state snapshots
//!
//! A [`GameState`] is an immutable snapshot of the game at one moment: the
//! sparse board, whose turn it is, the turn number, and cached per-color
//! cell counts. Transitions are pure: applying a placement produces a new
//! state, so tree searches can hold many branches that share history
//! without aliasing a mutable board.

use crate::board::{self, Board, Placement, PlayerColor};
use crate::{EngineError, Result};

/// One moment of the game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Sparse cell-to-owner map; absent key = empty cell.
    pub board: Board,
    /// The player to move.
    pub current: PlayerColor,
    /// Turn number, starting at 1; incremented once per applied placement.
    pub turn: u32,
    /// Cached occupied-cell counts, kept consistent with `board` on every
    /// transition so evaluators never rescan.
    counts: [u32; 2],
}

impl GameState {
    /// Empty board, Red to move, turn 1.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current: PlayerColor::Red,
            turn: 1,
            counts: [0, 0],
        }
    }

    /// Builds a state from raw parts, recomputing the cached counts.
    ///
    /// Used by collaborators (and tests) that assemble positions directly
    /// rather than replaying a move history.
    pub fn from_parts(board: Board, current: PlayerColor, turn: u32) -> Self {
        let mut state = GameState {
            board,
            current,
            turn,
            counts: [0, 0],
        };
        state.recount();
        state
    }

    /// Number of cells owned by `color`.
    #[inline]
    pub fn count(&self, color: PlayerColor) -> u32 {
        self.counts[color.index()]
    }

    /// Returns the successor state in which `color` has played `placement`.
    ///
    /// Pure: `self` is untouched. The placement is assumed valid; rule
    /// enforcement belongs to the adjudicator, and search strategies only
    /// feed this generator output.
    pub fn child(&self, placement: &Placement, color: PlayerColor) -> Self {
        let mut next = self.clone();
        next.apply(placement, color);
        next
    }

    /// Turn-ordered transition: rejects a placement by anyone other than the
    /// player to move, otherwise behaves like [`GameState::child`].
    pub fn advance(&self, placement: &Placement, color: PlayerColor) -> Result<Self> {
        if color != self.current {
            return Err(EngineError::OutOfTurn(color));
        }
        Ok(self.child(placement, color))
    }

    /// Canonical serialization of this state's board occupancy.
    pub fn canonical_key(&self) -> String {
        board::canonical_key(&self.board)
    }

    /// In-place application: write cells, clear full axes, refresh counts,
    /// pass the turn.
    fn apply(&mut self, placement: &Placement, color: PlayerColor) {
        board::place_cells(&mut self.board, placement, color);
        self.recount();
        self.current = color.opponent();
        self.turn += 1;
    }

    /// Recomputes the cached counts from the board. Line clears can remove
    /// cells of both owners, so the counts are rebuilt rather than patched.
    fn recount(&mut self) {
        self.counts = board::counts(&self.board);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
