use std::env;
use std::process::ExitCode;

use chess_game::{GameState, MoveCandidate};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = GameState::new();
    for token in args.iter().skip(1) {
        let played = MoveCandidate::parse_coordinate(token).and_then(|mv| game.play_move(mv));
        if let Err(e) = played {
            eprintln!("{token}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let color = game.current_player();
    let (legal_moves, status) = match (
        game.get_all_legal_moves(color),
        game.get_status_for(color),
    ) {
        (Ok(moves), Ok(status)) => (moves, status),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("side_to_move: {}", color.to_string().to_ascii_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
