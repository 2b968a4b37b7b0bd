//! Diagonal ray tracing for bishops (and the diagonal half of the queen).
//!
//! `bishop_attacks` walks each diagonal outward and stops at the first
//! occupied square, which is included in the result whatever its color. The
//! empty-board `BISHOP_RAYS` table is used as a cheap alignment test before
//! tracing.

use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

/// Squares reached from `square` stepping by `(file_step, rank_step)`, up to
/// and including the first square set in `occupancy`.
pub(crate) fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: u64) -> u64 {
    let mut file = (square.file() as i32 - 1) + file_step;
    let mut rank = (square.rank() as i32 - 1) + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < BISHOP_DIRECTIONS.len() {
            let (file_step, rank_step) = BISHOP_DIRECTIONS[i];
            rays |= trace_ray_const(sq as i32, file_step, rank_step);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}

/// Empty-board variant of `trace_ray` usable in const tables.
pub(crate) const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut attacks = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        attacks |= 1u64 << (rank * 8 + file);
        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, BISHOP_RAYS};
    use crate::game_state::chess_types::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        assert_eq!(BISHOP_RAYS[sq("d4").index()].count_ones(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let attacks = bishop_attacks(sq("c1"), sq("e3").mask());

        assert_ne!(attacks & sq("e3").mask(), 0);
        assert_eq!(attacks & sq("f4").mask(), 0);
        assert_ne!(attacks & sq("a3").mask(), 0);
    }
}
