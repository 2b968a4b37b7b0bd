use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::collect_step_moves;
use crate::move_generation::move_generator::PieceMoves;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(position: &Position, from: Square, player: Color) -> PieceMoves {
    collect_step_moves(position, rook_attacks(from, position.occupancy()), player)
}
