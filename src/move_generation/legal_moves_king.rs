//! King steps and castling.
//!
//! A king may never step next to the opposing king. Castling is offered only
//! when the variant allows it, and the squares the king stands on, crosses
//! and lands on are each verified on a simulated position.

use crate::game_state::chess_rules::initial_king_square;
use crate::game_state::chess_types::{mask_squares, Color, PieceKind, Ply, Square, Variant};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked, king_square};
use crate::move_generation::legal_move_shared::step_kind;
use crate::move_generation::move_generator::{MoveGenResult, PieceMoves};
use crate::moves::king_moves::{are_adjacent, king_targets};
use crate::moves::move_descriptions::{ChessMove, MoveKind};

struct CastlingPath {
    direction: i8,
    empty_squares: i8,
    rook_distance: i8,
    kind: MoveKind,
}

const KINGSIDE: CastlingPath = CastlingPath {
    direction: 1,
    empty_squares: 2,
    rook_distance: 3,
    kind: MoveKind::KingsideCastling,
};

const QUEENSIDE: CastlingPath = CastlingPath {
    direction: -1,
    empty_squares: 3,
    rook_distance: 4,
    kind: MoveKind::QueensideCastling,
};

pub fn generate_king_moves(
    position: &Position,
    from: Square,
    player: Color,
    ply: Ply,
    variant: Variant,
) -> MoveGenResult<PieceMoves> {
    let opposing_king = king_square(position, player.opposite())?;

    let mut moves: PieceMoves = mask_squares(king_targets(from))
        .filter(|to| !are_adjacent(*to, opposing_king))
        .filter_map(|to| step_kind(position, to, player).map(|kind| (to, kind)))
        .collect();

    if variant.allows_castling() && may_start_castling(position, from, player) {
        for path in [KINGSIDE, QUEENSIDE] {
            if let Some(to) = castling_destination(position, from, player, ply, opposing_king, &path)? {
                moves.insert(to, path.kind);
            }
        }
    }

    Ok(moves)
}

/// Unmoved king on its home square and not currently in check.
fn may_start_castling(position: &Position, from: Square, player: Color) -> bool {
    from == initial_king_square(player)
        && position
            .piece_at(from)
            .is_some_and(|king| king.is(player, PieceKind::King) && !king.has_moved)
        && !is_square_attacked(position, from, player.opposite())
}

fn castling_destination(
    position: &Position,
    from: Square,
    player: Color,
    ply: Ply,
    opposing_king: Square,
    path: &CastlingPath,
) -> MoveGenResult<Option<Square>> {
    let squares_between_empty = (1..=path.empty_squares).all(|distance| {
        from.offset(distance * path.direction, 0)
            .is_some_and(|square| position.is_empty_square(square))
    });
    if !squares_between_empty {
        return Ok(None);
    }

    let rook_ready = from
        .offset(path.rook_distance * path.direction, 0)
        .and_then(|square| position.piece_at(square))
        .is_some_and(|rook| rook.is(player, PieceKind::Rook) && !rook.has_moved);
    if !rook_ready {
        return Ok(None);
    }

    let (Some(transit), Some(destination)) = (
        from.offset(path.direction, 0),
        from.offset(2 * path.direction, 0),
    ) else {
        return Ok(None);
    };

    let stepped = apply_move(position, ChessMove::new(from, transit, MoveKind::Moving), ply)?;
    if is_king_in_check(&stepped, player)? {
        return Ok(None);
    }

    if are_adjacent(destination, opposing_king) {
        return Ok(None);
    }

    let castled = apply_move(position, ChessMove::new(from, destination, path.kind), ply)?;
    if is_king_in_check(&castled, player)? {
        return Ok(None);
    }

    Ok(Some(destination))
}
