//! Pawn capture tables.
//!
//! A pawn attacks the two diagonal squares one rank ahead in its own
//! direction of travel; pawns on their promotion rank attack nothing.

use crate::game_state::chess_types::{mask_if_on_board, Color, Square};

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const DARK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square.index()],
        Color::Dark => DARK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;

        table[sq] = mask_if_on_board(file - 1, rank + rank_step)
            | mask_if_on_board(file + 1, rank + rank_step);
        sq += 1;
    }

    table
}
