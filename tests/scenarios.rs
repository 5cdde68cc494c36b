//! Game scenarios driven from `data/scenarios.json`.

use serde::Deserialize;

use chess_game::{GameState, GameStatus, MoveCandidate};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    moves: String,
    to_move: String,
    status: String,
    legal: Option<usize>,
}

fn play_line(moves: &str) -> GameState {
    let mut game = GameState::new();
    for token in moves.split_whitespace() {
        let mv = MoveCandidate::parse_coordinate(token).expect("well-formed token");
        game.play_move(mv)
            .unwrap_or_else(|e| panic!("{token} rejected: {e}"));
    }
    game
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let game = play_line(&scenario.moves);
        let color = game.current_player();
        assert_eq!(
            color.to_string().to_ascii_lowercase(),
            scenario.to_move,
            "{}",
            scenario.name
        );

        let status = game.get_status_for(color).unwrap();
        assert_eq!(status.to_string(), scenario.status, "{}", scenario.name);

        if let Some(expected) = scenario.legal {
            let legal = game.get_all_legal_moves(color).unwrap();
            assert_eq!(legal.len(), expected, "{}", scenario.name);
        }
    }
}

#[test]
fn rejected_move_keeps_game_intact() {
    let mut game = play_line("e2e4 e7e5");
    let board = game.board().clone();
    let history = game.history().to_vec();

    assert!(game.play("e1", "e3").is_err());
    assert!(game.play("d7", "d5").is_err());
    assert!(game.play("d1", "h5x").is_err());

    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), &history[..]);
    assert_eq!(game.get_status_for(game.current_player()).unwrap(), GameStatus::Normal);
}

#[test]
fn castling_moves_rook_and_drops_rights() {
    let game = play_line("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 e1g1");
    let record = game.history().last().unwrap();
    assert!(record.is_castling);
    assert_eq!(
        game.board().get_piece("f1".parse().unwrap()).map(|p| p.symbol()),
        Some('R')
    );
    let rights = game.castling_rights();
    assert!(!rights.has(chess_game::Color::White, chess_game::CastleSide::Kingside));
    assert!(!rights.has(chess_game::Color::White, chess_game::CastleSide::Queenside));
    assert!(rights.has(chess_game::Color::Black, chess_game::CastleSide::Kingside));
}
