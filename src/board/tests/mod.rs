//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - Grid access, raw relocation and display
//! - `movegen.rs` - Pseudo-legal target generation
//! - `attacks.rs` - Attack sets and square-attack detection

mod attacks;

use crate::board::{Board, Piece, Square};

/// Board from a piece placement written rank 8 first
pub(super) fn board_from(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, rank_text) in placement.split('/').enumerate() {
        let mut file = 0;
        for c in rank_text.chars() {
            match c.to_digit(10) {
                Some(skip) => file += skip as usize,
                None => {
                    let piece = Piece::from_symbol(c).expect("valid piece symbol");
                    board.set_piece(Square(7 - row, file), Some(piece));
                    file += 1;
                }
            }
        }
    }
    board
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    let mut list: Vec<Square> = names.iter().map(|n| n.parse().unwrap()).collect();
    list.sort_by_key(|sq| sq.as_index());
    list
}

pub(super) fn sorted(mut list: Vec<Square>) -> Vec<Square> {
    list.sort_by_key(|sq| sq.as_index());
    list
}
