//! Knight jump table.

use crate::game_state::chess_types::{mask_if_on_board, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_knight_targets();

/// Squares a knight on `square` jumps to, regardless of occupancy.
#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square.index()]
}

const fn generate_knight_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KNIGHT_OFFSETS.len() {
            let (d_file, d_rank) = KNIGHT_OFFSETS[i];
            targets |= mask_if_on_board(file + d_file, rank + d_rank);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
