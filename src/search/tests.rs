//! Search tests.

use super::*;
use crate::board::{Board, CastlingRights, Piece, PieceKind, Square};

fn position(placement: &str, side: Color) -> GameState {
    let mut board = Board::empty();
    for (row, rank_text) in placement.split('/').enumerate() {
        let mut file = 0;
        for c in rank_text.chars() {
            match c.to_digit(10) {
                Some(skip) => file += skip as usize,
                None => {
                    board.set_piece(Square(7 - row, file), Piece::from_symbol(c));
                    file += 1;
                }
            }
        }
    }
    GameState::from_board(board, side, CastlingRights::none(), None).unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn fools_mate_setup() -> GameState {
    let mut game = GameState::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        game.play(from, to).unwrap();
    }
    game
}

#[test]
fn test_depth_is_clamped() {
    assert_eq!(SearchEngine::new(0).depth(), 1);
    assert_eq!(SearchEngine::new(4).depth(), 4);
    assert_eq!(SearchEngine::default().depth(), 3);
    assert_eq!(
        SearchEngine::from_config(SearchConfig { depth: 0 }).depth(),
        1
    );
}

#[test]
fn test_back_rank_mate_in_one() {
    for depth in 1..=3 {
        let mut game = position("7k/6pp/8/8/8/8/8/R5K1", Color::White);
        let result = SearchEngine::new(depth).search(&mut game).unwrap();
        let best = result.best_move.unwrap();
        assert_eq!((best.from, best.to), (sq("a1"), sq("a8")), "depth {depth}");
        assert_eq!(result.score, MATE_SCORE - 1);
        assert_eq!(result.skipped, 0);
    }
}

#[test]
fn test_black_finds_mate_in_one() {
    let mut game = fools_mate_setup();
    let result = SearchEngine::new(2).search(&mut game).unwrap();
    let best = result.best_move.unwrap();
    assert_eq!((best.from, best.to), (sq("d8"), sq("h4")));
    assert_eq!(result.score, -(MATE_SCORE - 1));
}

#[test]
fn test_captures_hanging_queen() {
    let mut game = position("4k3/8/8/3q4/8/8/8/3RK3", Color::White);
    let best = SearchEngine::new(2).choose_move(&mut game).unwrap().unwrap();
    assert_eq!((best.from, best.to), (sq("d1"), sq("d5")));
}

#[test]
fn test_promotes_to_queen() {
    let mut game = position("k7/7P/8/8/8/8/8/K7", Color::White);
    let best = SearchEngine::new(1).choose_move(&mut game).unwrap().unwrap();
    assert_eq!(best.from, sq("h7"));
    assert_eq!(best.to, sq("h8"));
    assert_eq!(best.promotion, Some(PieceKind::Queen));
}

#[test]
fn test_no_move_when_mated() {
    let mut game = fools_mate_setup();
    game.play("d8", "h4").unwrap();
    let result = SearchEngine::new(3).search(&mut game).unwrap();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
    assert_eq!(result.nodes, 0);
}

#[test]
fn test_no_move_when_stalemated() {
    let mut game = position("k7/8/1Q6/8/8/8/8/4K3", Color::Black);
    let result = SearchEngine::new(2).search(&mut game).unwrap();
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_search_restores_game() {
    let mut game = GameState::new();
    game.play("e2", "e4").unwrap();
    let before = game.snapshot();
    SearchEngine::new(2).search(&mut game).unwrap();
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_search_is_deterministic() {
    let mut game = GameState::new();
    let engine = SearchEngine::new(2);
    let first = engine.search(&mut game).unwrap();
    let second = engine.search(&mut game).unwrap();
    assert_eq!(first, second);
    assert!(first.nodes > 0);
    assert_eq!(first.skipped, 0);
}

#[test]
fn test_mate_score_prefers_shorter_mate() {
    assert!(terminal_score(GameStatus::Checkmate, Color::Black, 1).unwrap()
        > terminal_score(GameStatus::Checkmate, Color::Black, 3).unwrap());
    assert!(terminal_score(GameStatus::Checkmate, Color::White, 1).unwrap()
        < terminal_score(GameStatus::Checkmate, Color::White, 3).unwrap());
    assert_eq!(terminal_score(GameStatus::Stalemate, Color::White, 2), Some(0));
    assert_eq!(terminal_score(GameStatus::Check, Color::White, 2), None);
}
