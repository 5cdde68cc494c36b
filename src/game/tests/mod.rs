//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Move pipeline, special moves and game status
//! - `make_unmake.rs` - Reversible application for every change kind
//! - `perft.rs` - Move path counts for reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;

use crate::board::{Board, CastlingRights, Color, Piece, SideRights, Square};
use crate::game::GameState;

/// Build a game from a piece placement written rank 8 first, e.g.
/// `"4k3/P7/8/8/8/8/8/4K3"`.
pub(super) fn position(
    placement: &str,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> GameState {
    let mut board = Board::empty();
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_symbol(c).expect("valid piece symbol");
                board.set_piece(Square(rank, file), Some(piece));
                file += 1;
            }
        }
    }
    GameState::from_board(board, side_to_move, castling, en_passant).expect("valid position")
}

/// Castling rights from the usual `KQkq` letters, `-` for none
pub(super) fn rights(text: &str) -> CastlingRights {
    CastlingRights::from_sides(
        SideRights {
            kingside: text.contains('K'),
            queenside: text.contains('Q'),
        },
        SideRights {
            kingside: text.contains('k'),
            queenside: text.contains('q'),
        },
    )
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn play_all(game: &mut GameState, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        game.play(from, to)
            .unwrap_or_else(|e| panic!("{mv} rejected: {e}"));
    }
}
