#[macro_use]
extern crate criterion;

use std::collections::HashSet;

use criterion::{black_box, BenchmarkId, Criterion};

use tessera::board::{Board, Coord, PlayerColor, BOARD_N};
use tessera::generator::legal_placements;
use tessera::strategy::{Greedy, Mcts, Strategy};
use tessera::{GameState, MctsConfig};

/// Late-game position with an enclosed pocket of empty cells, matching the
/// fixture the integration tests search over.
fn cramped_state() -> GameState {
    let mut empties: HashSet<Coord> = HashSet::new();
    for row in 0..2 {
        for col in 0..5 {
            empties.insert(Coord::new(row, col));
        }
    }
    for &(row, col) in &[
        (2, 5),
        (3, 6),
        (4, 7),
        (5, 8),
        (6, 9),
        (7, 10),
        (8, 5),
        (9, 7),
        (10, 9),
    ] {
        empties.insert(Coord::new(row, col));
    }

    let mut board = Board::new();
    for row in 0..BOARD_N {
        for col in 0..BOARD_N {
            let coord = Coord::new(row, col);
            if empties.contains(&coord) {
                continue;
            }
            let color = if (row + col) % 2 == 0 {
                PlayerColor::Red
            } else {
                PlayerColor::Blue
            };
            board.insert(coord, color);
        }
    }

    GameState::from_parts(board, PlayerColor::Red, 140)
}

/// Sparse early-game position: two separated clusters.
fn open_state() -> GameState {
    let mut board = Board::new();
    for &(row, col) in &[(2, 2), (2, 3), (3, 2), (3, 3)] {
        board.insert(Coord::new(row, col), PlayerColor::Red);
    }
    for &(row, col) in &[(7, 7), (7, 8), (8, 7), (8, 8)] {
        board.insert(Coord::new(row, col), PlayerColor::Blue);
    }
    GameState::from_parts(board, PlayerColor::Red, 3)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let open = open_state();
    group.bench_function("legal_placements/open_board", |b| {
        b.iter(|| black_box(legal_placements(&open.board, PlayerColor::Red)))
    });

    let cramped = cramped_state();
    group.bench_function("legal_placements/cramped_board", |b| {
        b.iter(|| black_box(legal_placements(&cramped.board, PlayerColor::Red)))
    });

    group.bench_function("greedy/open_board", |b| {
        b.iter(|| {
            let mut greedy = Greedy::default();
            black_box(greedy.decide(&open, PlayerColor::Red))
        })
    });

    for &iterations in &[50, 200] {
        let config = MctsConfig::default()
            .with_seed(1)
            .with_max_iterations(iterations);
        group.bench_with_input(
            BenchmarkId::new("mcts_train", iterations),
            &iterations,
            |b, &_| {
                b.iter(|| {
                    let mut mcts = Mcts::new(cramped.clone(), config.clone());
                    mcts.train();
                    black_box(mcts.best_placement())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
