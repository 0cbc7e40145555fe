use tessera::board::PlayerColor;
use tessera::generator::legal_placements;
use tessera::{Agent, AgentConfig, AlphaBetaConfig, EngineError, GameOutcome, StrategyKind};

#[test]
fn agents_play_an_opening_exchange_in_turn_order() {
    let mut red = Agent::new(PlayerColor::Red, AgentConfig::default().with_seed(1));
    let mut blue = Agent::new(PlayerColor::Blue, AgentConfig::default().with_seed(2));

    let red_open = red.decide().expect("red opening");
    red.observe(PlayerColor::Red, &red_open).expect("red sees own move");
    blue.observe(PlayerColor::Red, &red_open).expect("blue sees red's move");

    assert_eq!(red.state().turn, 2);
    assert_eq!(red.state().current, PlayerColor::Blue);
    assert_eq!(red.state().count(PlayerColor::Red), 4);

    let blue_open = blue.decide().expect("blue opening");
    for cell in blue_open.cells() {
        assert!(
            !red.state().board.contains_key(cell),
            "blue's opening overlaps red's piece"
        );
    }
    red.observe(PlayerColor::Blue, &blue_open).expect("red sees blue's move");
    blue.observe(PlayerColor::Blue, &blue_open).expect("blue sees own move");

    assert_eq!(blue.state().turn, 3);
    assert_eq!(blue.state().current, PlayerColor::Red);
    assert_eq!(blue.state().count(PlayerColor::Blue), 4);
}

#[test]
fn observe_rejects_out_of_turn_moves() {
    let mut red = Agent::new(PlayerColor::Red, AgentConfig::default().with_seed(1));
    let mut blue = Agent::new(PlayerColor::Blue, AgentConfig::default().with_seed(2));

    let red_open = red.decide().expect("red opening");

    // Blue is not the player to move.
    let result = blue.observe(PlayerColor::Blue, &red_open);
    assert!(matches!(
        result,
        Err(EngineError::OutOfTurn(PlayerColor::Blue))
    ));
}

#[test]
fn adaptive_agents_keep_choosing_legal_placements() {
    let mut red = Agent::new(PlayerColor::Red, AgentConfig::default().with_seed(7));
    let mut blue = Agent::new(PlayerColor::Blue, AgentConfig::default().with_seed(8));

    for ply in 0..6 {
        let (mover, color) = if ply % 2 == 0 {
            (&mut red, PlayerColor::Red)
        } else {
            (&mut blue, PlayerColor::Blue)
        };

        let before = mover.state().clone();
        let placement = mover.decide().expect("a move exists");

        // Post-opening placements must come from the legal set; openings
        // only need empty target cells.
        if before.count(color) > 0 {
            assert!(
                legal_placements(&before.board, color).contains(&placement),
                "ply {ply}: illegal placement"
            );
        } else {
            for cell in placement.cells() {
                assert!(!before.board.contains_key(cell));
            }
        }

        red.observe(color, &placement).expect("in turn order");
        blue.observe(color, &placement).expect("in turn order");
    }

    assert_eq!(red.state().turn, 7);
}

#[test]
fn outcomes_follow_the_final_cell_counts() {
    assert_eq!(GameOutcome::from_scores(12, 8), GameOutcome::Win);
    assert_eq!(GameOutcome::from_scores(9, 9), GameOutcome::Draw);
    assert_eq!(GameOutcome::from_scores(3, 7), GameOutcome::Loss);
}

#[test]
fn inconclusive_search_falls_back_to_a_legal_placement() {
    // Depth zero makes alpha-beta report no decision on every turn.
    let config = AgentConfig::default()
        .with_strategy(StrategyKind::AlphaBeta)
        .with_alpha_beta(AlphaBetaConfig::default().with_depth(0))
        .with_seed(5);
    let mut red = Agent::new(PlayerColor::Red, config);
    let mut blue = Agent::new(PlayerColor::Blue, AgentConfig::default().with_seed(6));

    let red_open = red.decide().expect("red opening");
    red.observe(PlayerColor::Red, &red_open).expect("in order");
    blue.observe(PlayerColor::Red, &red_open).expect("in order");

    let blue_open = blue.decide().expect("blue opening");
    red.observe(PlayerColor::Blue, &blue_open).expect("in order");
    blue.observe(PlayerColor::Blue, &blue_open).expect("in order");

    // Red's strategy is inconclusive; the agent still produces a legal move.
    let placement = red.decide().expect("fallback produces a move");
    assert!(legal_placements(&red.state().board, PlayerColor::Red).contains(&placement));
}
