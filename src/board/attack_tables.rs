//! Precomputed step tables and ray directions.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build_step_table(offsets: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df))
                .collect()
        })
        .collect()
}

/// In-bounds knight destinations for each square, indexed by `Square::as_index`
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| build_step_table(&KNIGHT_OFFSETS));

/// In-bounds king destinations for each square, indexed by `Square::as_index`
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| build_step_table(&KING_OFFSETS));

#[inline]
pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.as_index()]
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.as_index()]
}
