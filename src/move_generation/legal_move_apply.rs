//! Move application: produces the position after a move.
//!
//! The source position is cloned and every side effect implied by the
//! `MoveKind` is applied to the clone before it is returned, so callers only
//! ever see complete positions.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Ply, Square};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub fn apply_move(position: &Position, mv: ChessMove, ply: Ply) -> ChessResult<Position> {
    let mut next = position.clone();

    let mut piece = next.take(mv.from).ok_or(ChessErrors::EmptySquare(mv.from))?;
    piece.has_moved = true;

    match mv.kind {
        MoveKind::Moving
        | MoveKind::Capture
        | MoveKind::KingsideCastling
        | MoveKind::QueensideCastling => {}
        MoveKind::PawnBoost => piece.last_double_step_ply = Some(ply),
        MoveKind::EnPassant => {
            // The captured pawn sits beside the origin, on the destination file.
            if let Some(victim) = Square::from_file_rank(mv.to.file(), mv.from.rank()) {
                next.set(victim, None);
            }
        }
        MoveKind::Promotion | MoveKind::CaptureWithPromotion => piece.kind = PieceKind::Queen,
    }

    next.set(mv.to, Some(piece));

    match mv.kind {
        MoveKind::KingsideCastling => move_rook(&mut next, mv, ply, 1, -1)?,
        MoveKind::QueensideCastling => move_rook(&mut next, mv, ply, -2, 1)?,
        _ => {}
    }

    Ok(next)
}

/// Relocates the castling rook from `to + rook_from_delta` to
/// `to + rook_to_delta` on the king's rank.
fn move_rook(
    position: &mut Position,
    mv: ChessMove,
    ply: Ply,
    rook_from_delta: i8,
    rook_to_delta: i8,
) -> ChessResult<()> {
    let malformed = ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
        ply,
    };
    let rook_from = mv.to.offset(rook_from_delta, 0).ok_or_else(|| malformed.clone())?;
    let rook_to = mv.to.offset(rook_to_delta, 0).ok_or_else(|| malformed.clone())?;

    let mut rook = position.take(rook_from).ok_or(malformed)?;
    rook.has_moved = true;
    position.set(rook_to, Some(rook));
    Ok(())
}
