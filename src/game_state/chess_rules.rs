//! Canonical chess-rule constants and terminal-state classification.
//!
//! Outcome evaluation is a pure function of a position, the legal moves of
//! the side to move, and the insufficient-material settings. Checkmate and
//! stalemate are decided first; material is only consulted while moves remain.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{LegalMoveMap, MoveGenResult};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard back rank, file a first.
pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The only square a king may castle from.
#[inline]
pub const fn initial_king_square(color: Color) -> Square {
    match color {
        Color::Light => Square::E1,
        Color::Dark => Square::E8,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl GameOutcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// Which bare-material endings count as drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsufficientMaterialRules {
    /// King and bishop against king and bishop with both bishops on squares
    /// of the same color. Off unless configured.
    pub same_color_bishops_draw: bool,
}

pub fn evaluate_outcome(
    position: &Position,
    legal_moves: &LegalMoveMap,
    side_to_move: Color,
    rules: InsufficientMaterialRules,
) -> MoveGenResult<GameOutcome> {
    if legal_moves.is_empty() {
        return Ok(if is_king_in_check(position, side_to_move)? {
            GameOutcome::Checkmate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        });
    }

    if is_insufficient_material(position, rules) {
        return Ok(GameOutcome::InsufficientMaterial);
    }

    Ok(GameOutcome::Ongoing)
}

pub fn is_insufficient_material(position: &Position, rules: InsufficientMaterialRules) -> bool {
    let material = |color: Color| -> Vec<(Square, PieceKind)> {
        position
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind != PieceKind::King)
            .map(|(square, piece)| (square, piece.kind))
            .collect()
    };
    let light = material(Color::Light);
    let dark = material(Color::Dark);

    match (light.as_slice(), dark.as_slice()) {
        ([], []) => true,
        ([], [(_, kind)]) | ([(_, kind)], []) => kind.is_minor(),
        ([(light_sq, PieceKind::Bishop)], [(dark_sq, PieceKind::Bishop)]) => {
            rules.same_color_bishops_draw && light_sq.is_light() == dark_sq.is_light()
        }
        _ => false,
    }
}

/// Light material minus Dark material.
pub fn material_balance(position: &Position) -> i32 {
    position
        .pieces()
        .map(|(_, piece)| match piece.owner {
            Color::Light => piece.kind.material_value(),
            Color::Dark => -piece.kind.material_value(),
        })
        .sum()
}
