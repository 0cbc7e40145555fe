//! Board primitives for the placement game
//!
//! The board is an `N x N` torus held as a sparse map from coordinate to
//! owner; an absent key is an empty cell. Placements write four cells and
//! then clear any row or column that became fully occupied.

use std::collections::HashMap;
use std::fmt;

/// Side length of the square toroidal board.
pub const BOARD_N: u8 = 11;

/// Turn cap after which the game is scored by cell count.
pub const MAX_TURNS: u32 = 150;

/// One of the two players.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlayerColor {
    /// Moves first.
    Red,
    /// Moves second.
    Blue,
}

impl PlayerColor {
    /// Returns the other player. Involutive: `c.opponent().opponent() == c`.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Index into per-color arrays (`Red = 0`, `Blue = 1`).
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
        }
    }

    /// Single-character token used in canonical board keys.
    const fn token(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The four orthogonal directions on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A cell on the toroidal board. Ordered row-major; the total order backs
/// canonical sorting of placements and board keys.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate, wrapping both indices onto the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Coord {
            row: row % BOARD_N,
            col: col % BOARD_N,
        }
    }

    /// Returns the neighboring cell in the given direction, wrapping at the
    /// board edges.
    #[inline]
    pub const fn shift(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Coord::new(self.row + BOARD_N - 1, self.col),
            Direction::Down => Coord::new(self.row + 1, self.col),
            Direction::Left => Coord::new(self.row, self.col + BOARD_N - 1),
            Direction::Right => Coord::new(self.row, self.col + 1),
        }
    }

    /// The four orthogonal neighbors of this cell.
    pub const fn neighbors(self) -> [Coord; 4] {
        [
            self.shift(Direction::Up),
            self.shift(Direction::Down),
            self.shift(Direction::Left),
            self.shift(Direction::Right),
        ]
    }

    /// Toroidal orthogonal adjacency test.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let neighbors = self.neighbors();
        neighbors.contains(&other)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Sparse board: occupied cells only.
pub type Board = HashMap<Coord, PlayerColor>;

/// A tetromino placement: four distinct, edge-connected cells claimed in one
/// turn. Cells are stored coordinate-sorted, so value equality and hashing
/// are canonical: two placements covering the same cells compare equal no
/// matter how they were assembled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Placement {
    cells: [Coord; 4],
}

impl Placement {
    /// Creates a placement from four cells, canonicalizing their order.
    pub fn new(mut cells: [Coord; 4]) -> Self {
        cells.sort_unstable();
        Placement { cells }
    }

    /// The four cells, in canonical (sorted) order.
    #[inline]
    pub const fn cells(&self) -> &[Coord; 4] {
        &self.cells
    }

    /// True if all four cells share a row or share a column (an "I" piece,
    /// whether or not it wraps the board edge).
    pub fn is_straight(&self) -> bool {
        let rows_equal = self.cells.iter().all(|c| c.row == self.cells[0].row);
        let cols_equal = self.cells.iter().all(|c| c.col == self.cells[0].col);
        rows_equal || cols_equal
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.cells[0], self.cells[1], self.cells[2], self.cells[3]
        )
    }
}

/// Number of empty cells in the given row.
pub fn free_cells_in_row(board: &Board, row: u8) -> u8 {
    let mut free = BOARD_N;
    for col in 0..BOARD_N {
        if board.contains_key(&Coord::new(row, col)) {
            free -= 1;
        }
    }
    free
}

/// Number of empty cells in the given column.
pub fn free_cells_in_col(board: &Board, col: u8) -> u8 {
    let mut free = BOARD_N;
    for row in 0..BOARD_N {
        if board.contains_key(&Coord::new(row, col)) {
            free -= 1;
        }
    }
    free
}

/// Writes the placement's cells onto the board, then clears every row and
/// column that became fully occupied. Only the rows and columns touched by
/// the placement are checked (no other axis can have changed) but the
/// result is identical to a full-board scan. Cleared axes drop cells of both
/// owners.
///
/// Target cells must be empty; callers validate placements before applying
/// them.
pub fn place_cells(board: &mut Board, placement: &Placement, color: PlayerColor) {
    let mut touched_rows = Vec::with_capacity(4);
    let mut touched_cols = Vec::with_capacity(4);

    for &cell in placement.cells() {
        debug_assert!(
            !board.contains_key(&cell),
            "placement targets occupied cell {cell}"
        );
        if !touched_rows.contains(&cell.row) {
            touched_rows.push(cell.row);
        }
        if !touched_cols.contains(&cell.col) {
            touched_cols.push(cell.col);
        }
        board.insert(cell, color);
    }

    clear_axes(board, &touched_rows, &touched_cols);
}

/// Removes every cell on the listed rows/columns that are fully occupied.
fn clear_axes(board: &mut Board, rows: &[u8], cols: &[u8]) {
    let mut to_clear = Vec::new();

    for &row in rows {
        if free_cells_in_row(board, row) == 0 {
            to_clear.extend((0..BOARD_N).map(|col| Coord::new(row, col)));
        }
    }
    for &col in cols {
        if free_cells_in_col(board, col) == 0 {
            to_clear.extend((0..BOARD_N).map(|row| Coord::new(row, col)));
        }
    }

    for cell in to_clear {
        board.remove(&cell);
    }
}

/// Occupied-cell counts per owner (`Red = 0`, `Blue = 1`).
///
/// A full rescan; [`crate::GameState`] caches the result across transitions
/// rather than calling this per evaluation.
pub fn counts(board: &Board) -> [u32; 2] {
    let mut counts = [0, 0];
    for owner in board.values() {
        counts[owner.index()] += 1;
    }
    counts
}

/// Canonical serialization of a board's full occupancy.
///
/// All `(coord, owner)` pairs are sorted by the coordinate total order and
/// joined with an unambiguous token per cell, so two boards with identical
/// occupancy produce identical keys regardless of move history. The token
/// alphabet (digits, `,`, `:`, owner letters) is disjoint from the `;`
/// delimiter, which makes the encoding injective.
pub fn canonical_key(board: &Board) -> String {
    let mut cells: Vec<(Coord, PlayerColor)> =
        board.iter().map(|(&coord, &owner)| (coord, owner)).collect();
    cells.sort_unstable_by_key(|&(coord, _)| coord);

    let tokens: Vec<String> = cells
        .iter()
        .map(|(coord, owner)| format!("{},{}:{}", coord.row, coord.col, owner))
        .collect();
    tokens.join(";")
}
