//! Legal placement enumeration
//!
//! Placements grow outward from a player's existing cells: for each owned
//! anchor, every free tetromino that touches (but does not include) the
//! anchor is a candidate. Shapes are grown breadth-first one cell at a
//! time, canonicalized by sorting so each partial shape is explored once.

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Coord, Direction, Placement, PlayerColor, BOARD_N};

/// All free tetrominoes that include `origin` and avoid `blocked` cells.
///
/// A blocked origin yields no candidates: callers aggregate across anchors,
/// so a bad seed silently contributes nothing rather than aborting the scan.
pub fn tetrominoes(origin: Coord, blocked: &HashSet<Coord>) -> Vec<Placement> {
    let mut found = Vec::new();
    if blocked.contains(&origin) {
        return found;
    }

    let mut queue: VecDeque<Vec<Coord>> = VecDeque::new();
    queue.push_back(vec![origin]);
    let mut seen: HashSet<Vec<Coord>> = HashSet::new();

    while let Some(mut shape) = queue.pop_front() {
        // Sorting makes every partial shape a canonical key, so the same
        // shape reached by different growth orders is expanded only once.
        shape.sort_unstable();
        if !seen.insert(shape.clone()) {
            continue;
        }

        if shape.len() == 4 {
            found.push(Placement::new([shape[0], shape[1], shape[2], shape[3]]));
            continue;
        }

        for &cell in &shape {
            for direction in Direction::ALL {
                let grown = cell.shift(direction);
                if shape.contains(&grown) || blocked.contains(&grown) {
                    continue;
                }
                let mut next = shape.clone();
                next.push(grown);
                queue.push_back(next);
            }
        }
    }

    found
}

/// All free tetrominoes adjacent to `anchor` that do not include it.
///
/// The anchor itself is treated as blocked and a search is seeded from each
/// of its four neighbors; the same shape can be reached from more than one
/// seed, so results are de-duplicated by canonical placement identity,
/// keeping first-seen order.
pub fn tetrominoes_adjacent(anchor: Coord, occupied: &HashSet<Coord>) -> Vec<Placement> {
    let mut blocked = occupied.clone();
    blocked.insert(anchor);

    let mut found = Vec::new();
    let mut seen: HashSet<Placement> = HashSet::new();
    for direction in Direction::ALL {
        let seed = anchor.shift(direction);
        for placement in tetrominoes(seed, &blocked) {
            if seen.insert(placement) {
                found.push(placement);
            }
        }
    }
    found
}

/// All legal placements for `color`: the union, over every cell `color`
/// owns, of the free tetrominoes growing off that cell.
///
/// Anchors are visited in coordinate order so the candidate list, and
/// every first-seen tie-break built on it, is reproducible.
pub fn legal_placements(board: &Board, color: PlayerColor) -> Vec<Placement> {
    let occupied: HashSet<Coord> = board.keys().copied().collect();

    let mut anchors: Vec<Coord> = board
        .iter()
        .filter(|(_, &owner)| owner == color)
        .map(|(&coord, _)| coord)
        .collect();
    anchors.sort_unstable();

    let mut found = Vec::new();
    let mut seen: HashSet<Placement> = HashSet::new();
    for anchor in anchors {
        for placement in tetrominoes_adjacent(anchor, &occupied) {
            if seen.insert(placement) {
                found.push(placement);
            }
        }
    }
    found
}

/// Picks an opening placement: the first piece of either color has no owned
/// anchor to grow from.
///
/// On an empty board the seed cell is arbitrary (the torus has no edges, so
/// no location is strategically distinct. With pieces already down, the seed
/// is a random occupied cell regardless of owner. Straight ("I") placements
/// are filtered out to avoid committing four cells to a single axis, and the
/// choice among the rest is uniform.
pub fn opening_placement<R: Rng>(board: &Board, rng: &mut R) -> Option<Placement> {
    let occupied: HashSet<Coord> = board.keys().copied().collect();

    let seed = if board.is_empty() {
        Coord::new(rng.gen_range(0..BOARD_N), rng.gen_range(0..BOARD_N))
    } else {
        let mut cells: Vec<Coord> = board.keys().copied().collect();
        cells.sort_unstable();
        *cells.choose(rng)?
    };

    let candidates: Vec<Placement> = tetrominoes_adjacent(seed, &occupied)
        .into_iter()
        .filter(|placement| !placement.is_straight())
        .collect();
    candidates.choose(rng).copied()
}
