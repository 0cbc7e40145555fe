//! Self-play demo
//!
//! Plays a short series of games between two adaptive agents and tallies
//! the outcomes from red's perspective. Run with:
//!
//! ```bash
//! cargo run --release --example self_play
//! ```

use tessera::board::{Coord, PlayerColor, BOARD_N, MAX_TURNS};
use tessera::{Agent, AgentConfig, GameOutcome, GameState};

const GAMES: u64 = 2;

fn main() {
    env_logger::init();

    println!("tessera self-play");
    println!("=================");
    println!();

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    for game in 0..GAMES {
        let outcome = play_game(game);
        match outcome {
            GameOutcome::Win => wins += 1,
            GameOutcome::Draw => draws += 1,
            GameOutcome::Loss => losses += 1,
        }
        println!("Game {}: {:?} for red", game + 1, outcome);
        println!();
    }

    println!("Red tally: {wins}W / {draws}D / {losses}L over {GAMES} games");
}

fn play_game(seed: u64) -> GameOutcome {
    let mut red = Agent::new(PlayerColor::Red, AgentConfig::default().with_seed(seed));
    let mut blue = Agent::new(
        PlayerColor::Blue,
        AgentConfig::default().with_seed(seed + 1000),
    );
    let mut shared = GameState::new();

    while shared.turn <= MAX_TURNS {
        let mover = shared.current;
        let decision = match mover {
            PlayerColor::Red => red.decide(),
            PlayerColor::Blue => blue.decide(),
        };

        let placement = match decision {
            Ok(placement) => placement,
            // The side to move is out of placements and loses.
            Err(_) => {
                render(&shared);
                return match mover {
                    PlayerColor::Red => GameOutcome::Loss,
                    PlayerColor::Blue => GameOutcome::Win,
                };
            }
        };

        shared = shared
            .advance(&placement, mover)
            .expect("agents play in turn order");
        red.observe(mover, &placement)
            .expect("red tracks the shared state");
        blue.observe(mover, &placement)
            .expect("blue tracks the shared state");
    }

    // Turn cap reached: score by cell count.
    render(&shared);
    GameOutcome::from_scores(
        shared.count(PlayerColor::Red),
        shared.count(PlayerColor::Blue),
    )
}

fn render(state: &GameState) {
    for row in 0..BOARD_N {
        let mut line = String::with_capacity(BOARD_N as usize * 2);
        for col in 0..BOARD_N {
            let glyph = match state.board.get(&Coord::new(row, col)) {
                Some(PlayerColor::Red) => 'R',
                Some(PlayerColor::Blue) => 'B',
                None => '.',
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{line}");
    }
    println!(
        "turn {}: red {} - blue {}",
        state.turn,
        state.count(PlayerColor::Red),
        state.count(PlayerColor::Blue)
    );
}
