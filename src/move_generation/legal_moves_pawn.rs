use crate::game_state::chess_types::{Color, PieceKind, Ply, Square};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::PieceMoves;
use crate::moves::move_descriptions::MoveKind;

/// Pawn pushes, diagonal captures and en passant for the pawn on `from`.
/// Arriving on the last rank always yields a promotion kind.
pub fn generate_pawn_moves(position: &Position, from: Square, player: Color, ply: Ply) -> PieceMoves {
    let mut moves = PieceMoves::new();
    let step = player.pawn_step();
    let promotes = |to: Square| to.rank() == player.promotion_rank();

    if let Some(one_step) = from.offset(0, step).filter(|to| position.is_empty_square(*to)) {
        if promotes(one_step) {
            moves.insert(one_step, MoveKind::Promotion);
        } else {
            moves.insert(one_step, MoveKind::Moving);

            if from.rank() == player.pawn_start_rank() {
                if let Some(two_step) = from.offset(0, 2 * step).filter(|to| position.is_empty_square(*to)) {
                    moves.insert(two_step, MoveKind::PawnBoost);
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(target) = from.offset(d_file, step) else {
            continue;
        };

        if position.is_capturable_by(target, player) {
            let kind = if promotes(target) {
                MoveKind::CaptureWithPromotion
            } else {
                MoveKind::Capture
            };
            moves.insert(target, kind);
        } else if position.is_empty_square(target) && can_take_en_passant(position, from, d_file, player, ply) {
            moves.insert(target, MoveKind::EnPassant);
        }
    }

    moves
}

/// An opposing pawn beside `from` that double-stepped on the ply right
/// before this one can be taken en passant.
fn can_take_en_passant(position: &Position, from: Square, d_file: i8, player: Color, ply: Ply) -> bool {
    let Some(previous_ply) = ply.checked_sub(1) else {
        return false;
    };

    from.offset(d_file, 0)
        .and_then(|beside| position.piece_at(beside))
        .is_some_and(|piece| {
            piece.is(player.opposite(), PieceKind::Pawn)
                && piece.last_double_step_ply == Some(previous_ply)
        })
}
