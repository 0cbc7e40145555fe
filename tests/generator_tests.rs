use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tessera::board::{Board, Coord, Placement, PlayerColor};
use tessera::generator::{legal_placements, opening_placement, tetrominoes, tetrominoes_adjacent};

/// Free-tetromino placements adjacent to (but excluding) a single cell on an
/// otherwise empty board: 19 fixed tetromino shapes contain any given cell
/// in 76 ways; blocking the anchor leaves 47 per neighbor seed; 4 seeds
/// minus the 24 shapes that touch the anchor on two sides gives 164.
const ADJACENT_TETROMINOES: usize = 164;

fn four_cells(placement: &Placement) -> [Coord; 4] {
    *placement.cells()
}

/// True if the four cells form one orthogonally connected group.
fn is_connected(placement: &Placement) -> bool {
    let cells = four_cells(placement);
    let mut reached = vec![cells[0]];
    let mut grew = true;
    while grew {
        grew = false;
        for &cell in &cells {
            if reached.contains(&cell) {
                continue;
            }
            if reached.iter().any(|&r| r.is_adjacent(cell)) {
                reached.push(cell);
                grew = true;
            }
        }
    }
    reached.len() == 4
}

#[test]
fn placements_are_legal() {
    let mut board = Board::new();
    board.insert(Coord::new(5, 5), PlayerColor::Red);
    board.insert(Coord::new(5, 6), PlayerColor::Red);
    board.insert(Coord::new(2, 2), PlayerColor::Blue);

    let moves = legal_placements(&board, PlayerColor::Red);
    assert!(!moves.is_empty());

    for placement in &moves {
        let cells = four_cells(placement);

        // Four distinct, currently empty cells.
        let distinct: HashSet<Coord> = cells.iter().copied().collect();
        assert_eq!(distinct.len(), 4, "{placement} repeats a cell");
        for cell in cells {
            assert!(!board.contains_key(&cell), "{placement} covers an occupied cell");
        }

        assert!(is_connected(placement), "{placement} is not connected");

        // Touches the red structure somewhere.
        let touches_red = cells.iter().any(|cell| {
            cell.neighbors()
                .iter()
                .any(|n| board.get(n) == Some(&PlayerColor::Red))
        });
        assert!(touches_red, "{placement} does not touch a red cell");
    }
}

#[test]
fn no_duplicate_placements_across_anchors() {
    let mut board = Board::new();
    // Two adjacent anchors generate heavily overlapping shape sets.
    board.insert(Coord::new(4, 4), PlayerColor::Red);
    board.insert(Coord::new(4, 5), PlayerColor::Red);

    let moves = legal_placements(&board, PlayerColor::Red);
    let unique: HashSet<Placement> = moves.iter().copied().collect();
    assert_eq!(moves.len(), unique.len());
}

#[test]
fn single_anchor_yields_the_full_catalog() {
    let anchor = Coord::new(5, 5);
    let mut board = Board::new();
    board.insert(anchor, PlayerColor::Red);

    let moves = legal_placements(&board, PlayerColor::Red);
    assert_eq!(moves.len(), ADJACENT_TETROMINOES);

    // Cross-check against a brute-force enumeration of every 4-subset of
    // the 9x9 window around the anchor (any placement that touches the
    // anchor fits inside it).
    let window: Vec<Coord> = (1..=9)
        .flat_map(|row| (1..=9).map(move |col| Coord::new(row, col)))
        .collect();

    let mut brute_force = 0;
    let n = window.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    let cells = [window[i], window[j], window[k], window[l]];
                    if cells.contains(&anchor) {
                        continue;
                    }
                    let touches_anchor =
                        cells.iter().any(|cell| cell.is_adjacent(anchor));
                    if !touches_anchor {
                        continue;
                    }
                    if is_connected(&Placement::new(cells)) {
                        brute_force += 1;
                    }
                }
            }
        }
    }
    assert_eq!(brute_force, ADJACENT_TETROMINOES);
}

#[test]
fn diagonal_pair_matches_brute_force() {
    // Two owned cells on a diagonal, otherwise free board: the anchor
    // searches overlap heavily and every duplicate must be dropped.
    let anchors = [Coord::new(5, 5), Coord::new(6, 6)];
    let mut board = Board::new();
    for &anchor in &anchors {
        board.insert(anchor, PlayerColor::Red);
    }

    let moves = legal_placements(&board, PlayerColor::Red);

    let window: Vec<Coord> = (1..=10)
        .flat_map(|row| (1..=10).map(move |col| Coord::new(row, col)))
        .collect();

    let mut brute_force = 0;
    let n = window.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    let cells = [window[i], window[j], window[k], window[l]];
                    if cells.iter().any(|cell| board.contains_key(cell)) {
                        continue;
                    }
                    let touches_anchor = cells
                        .iter()
                        .any(|cell| anchors.iter().any(|&a| cell.is_adjacent(a)));
                    if !touches_anchor {
                        continue;
                    }
                    if is_connected(&Placement::new(cells)) {
                        brute_force += 1;
                    }
                }
            }
        }
    }

    assert_eq!(moves.len(), brute_force);
}

#[test]
fn blocked_origin_yields_no_candidates() {
    let origin = Coord::new(3, 3);
    let mut blocked = HashSet::new();
    blocked.insert(origin);

    assert!(tetrominoes(origin, &blocked).is_empty());
}

#[test]
fn obstructions_shrink_the_candidate_set() {
    let anchor = Coord::new(5, 5);
    let occupied: HashSet<Coord> = [anchor].into_iter().collect();

    let unobstructed = tetrominoes_adjacent(anchor, &occupied);

    let mut crowded = occupied.clone();
    crowded.insert(Coord::new(5, 6));
    crowded.insert(Coord::new(4, 5));
    let obstructed = tetrominoes_adjacent(anchor, &crowded);

    assert!(obstructed.len() < unobstructed.len());
    for placement in &obstructed {
        for cell in placement.cells() {
            assert!(!crowded.contains(cell));
        }
    }
}

#[test]
fn opening_placements_avoid_straight_pieces() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);

        // First placement of the game.
        let empty = Board::new();
        let opening = opening_placement(&empty, &mut rng).expect("empty board has openings");
        assert!(!opening.is_straight());
        assert!(is_connected(&opening));

        // Second player's first placement seeds from the occupied board.
        let mut board = Board::new();
        for &cell in opening.cells() {
            board.insert(cell, PlayerColor::Red);
        }
        let reply = opening_placement(&board, &mut rng).expect("reply exists");
        assert!(!reply.is_straight());
        for cell in reply.cells() {
            assert!(!board.contains_key(cell));
        }
    }
}
