//! Drive the text play loop with scripted input.

use std::io::Cursor;

use chess_game::cli::command::parse_command;
use chess_game::cli::options::PlayOptions;
use chess_game::cli::{Flow, Session};
use chess_game::{Color, GameStatus};

fn run_script(options: PlayOptions, script: &str) -> (Session, String) {
    let mut session = Session::new(options);
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn plays_fools_mate() {
    let (session, out) = run_script(PlayOptions::default(), "f2f3\ne7e5\ng2g4\nd8h4\nstatus\n");
    assert_eq!(session.game().history().len(), 4);
    assert!(out.contains("White to move: checkmate"));

    let status = session
        .game()
        .get_status_for(session.game().current_player())
        .unwrap();
    assert_eq!(status, GameStatus::Checkmate);
}

#[test]
fn refuses_moves_after_game_over() {
    let (session, out) = run_script(PlayOptions::default(), "f2f3\ne7e5\ng2g4\nd8h4\na2a3\n");
    assert_eq!(session.game().history().len(), 4);
    assert!(out.contains("game over"));
}

#[test]
fn reports_illegal_moves_and_undo() {
    let (session, out) = run_script(PlayOptions::default(), "e2e5\ne2e4\nundo\nundo\n");
    assert!(out.contains("illegal:"));
    assert!(out.contains("nothing to undo"));
    assert!(session.game().history().is_empty());
}

#[test]
fn engine_answers_as_black() {
    let options = PlayOptions::from_args(["--engine", "black", "--depth", "1"].map(String::from))
        .unwrap();
    let (session, out) = run_script(options, "e2e4\n");
    assert_eq!(session.game().history().len(), 2);
    assert_eq!(session.game().current_player(), Color::White);
    assert!(out.contains("bestmove"));
}

#[test]
fn quit_stops_reading() {
    let (session, _) = run_script(PlayOptions::default(), "e2e4\nquit\ne7e5\n");
    assert_eq!(session.game().history().len(), 1);
}

#[test]
fn set_and_perft_commands() {
    let mut session = Session::new(PlayOptions::default());
    let mut out = Vec::new();

    let flow = session
        .execute(parse_command("set depth 2").unwrap(), &mut out)
        .unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(session.options().search.depth, 2);

    session
        .execute(parse_command("perft 2").unwrap(), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("perft depth 2 nodes 400"));
}
