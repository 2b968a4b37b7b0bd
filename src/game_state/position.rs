//! Immutable piece placement snapshot.
//!
//! A `Position` is a flat `[Option<Piece>; 64]` so cloning it for a
//! simulated move is a plain array copy. Positions are never changed once
//! handed out; applying a move produces a new one (see
//! `move_generation::legal_move_apply`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Ply, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::render_game_state::render_position;

/// Serialized form of one occupied square:
/// `(square, owner, kind, has_moved, last_double_step_ply)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceEntry(pub Square, pub Color, pub PieceKind, pub bool, pub Option<Ply>);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<PieceEntry>", try_from = "Vec<PieceEntry>")]
pub struct Position {
    squares: [Option<Piece>; 64],
}

impl Position {
    /// Builds a position from occupied squares.
    ///
    /// Fails if a square is listed twice or if either side does not have
    /// exactly one king.
    pub fn from_pieces<I>(pieces: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut position = Position::empty();
        for (square, piece) in pieces {
            if position.squares[square.index()].is_some() {
                return Err(ChessErrors::SquareOccupied(square));
            }
            position.squares[square.index()] = Some(piece);
        }

        for color in [Color::Light, Color::Dark] {
            let kings = position
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(ChessErrors::MissingKing(color)),
                1 => {}
                _ => {
                    return Err(ChessErrors::InvalidPositionNotation(format!(
                        "{color:?} has {kings} kings"
                    )))
                }
            }
        }

        Ok(position)
    }

    pub(crate) const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// True when `square` holds an opposing piece `player` may capture.
    /// Kings are never capturable.
    #[inline]
    pub fn is_capturable_by(&self, square: Square, player: Color) -> bool {
        matches!(
            self.squares[square.index()],
            Some(piece) if piece.owner != player && piece.kind != PieceKind::King
        )
    }

    /// Occupied squares in index order (`a1`, `b1`, ..., `h8`).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == color)
    }

    /// One bit per occupied square, used by the ray tracers.
    pub fn occupancy(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (square, _)| acc | square.mask())
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Returns the position after `mv` played at `ply`. The move is not
    /// checked for legality; see `GameState::apply_move` for that.
    pub fn apply(&self, mv: ChessMove, ply: Ply) -> ChessResult<Position> {
        apply_move(self, mv, ply)
    }

    /// Serialized tuple form, one entry per occupied square.
    pub fn to_entries(&self) -> Vec<PieceEntry> {
        self.pieces()
            .map(|(square, piece)| {
                PieceEntry(
                    square,
                    piece.owner,
                    piece.kind,
                    piece.has_moved,
                    piece.last_double_step_ply,
                )
            })
            .collect()
    }
}

impl From<Position> for Vec<PieceEntry> {
    fn from(position: Position) -> Self {
        position.to_entries()
    }
}

impl TryFrom<Vec<PieceEntry>> for Position {
    type Error = ChessErrors;

    fn try_from(entries: Vec<PieceEntry>) -> Result<Self, Self::Error> {
        Position::from_pieces(entries.into_iter().map(
            |PieceEntry(square, owner, kind, has_moved, last_double_step_ply)| {
                (
                    square,
                    Piece {
                        owner,
                        kind,
                        has_moved,
                        last_double_step_ply,
                    },
                )
            },
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
