//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal destinations per piece, applies each candidate to a
//! cloned position, and drops the ones that leave the mover's own king
//! attacked.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind, Ply, Square, Variant};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{LegalMoveMap, MoveGenResult, MoveGenerator, PieceMoves};
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        position: &Position,
        player: Color,
        ply: Ply,
        variant: Variant,
    ) -> MoveGenResult<LegalMoveMap> {
        legal_moves(position, player, ply, variant)
    }
}

/// Destinations for the piece on `from`, ignoring whether its own king ends
/// up attacked.
pub fn pseudo_legal_moves(
    position: &Position,
    from: Square,
    ply: Ply,
    variant: Variant,
) -> MoveGenResult<PieceMoves> {
    let piece = position.piece_at(from).ok_or(ChessErrors::EmptySquare(from))?;
    let player = piece.owner;

    let moves = match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, player, ply),
        PieceKind::Knight => generate_knight_moves(position, from, player),
        PieceKind::Bishop => generate_bishop_moves(position, from, player),
        PieceKind::Rook => generate_rook_moves(position, from, player),
        PieceKind::Queen => generate_queen_moves(position, from, player),
        PieceKind::King => generate_king_moves(position, from, player, ply, variant)?,
    };

    Ok(moves)
}

pub fn legal_moves(
    position: &Position,
    player: Color,
    ply: Ply,
    variant: Variant,
) -> MoveGenResult<LegalMoveMap> {
    let mut legal = LegalMoveMap::default();

    for (from, _) in position.pieces_of(player) {
        let mut piece_moves = PieceMoves::new();

        for (to, kind) in pseudo_legal_moves(position, from, ply, variant)? {
            let next = apply_move(position, ChessMove::new(from, to, kind), ply)?;

            // Illegal if own king is in check after move.
            if is_king_in_check(&next, player)? {
                continue;
            }

            piece_moves.insert(to, kind);
        }

        legal.insert_piece_moves(from, piece_moves);
    }

    Ok(legal)
}
