//! File and rank ray tracing for rooks (and the orthogonal half of the queen).

use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{trace_ray, trace_ray_const};

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut rays = 0u64;
        let mut i = 0usize;
        while i < ROOK_DIRECTIONS.len() {
            let (file_step, rank_step) = ROOK_DIRECTIONS[i];
            rays |= trace_ray_const(sq as i32, file_step, rank_step);
            i += 1;
        }

        table[sq] = rays;
        sq += 1;
    }

    table
}
