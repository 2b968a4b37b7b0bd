use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Ply, Square, Variant};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// Destinations of a single piece and what moving there does.
pub type PieceMoves = BTreeMap<Square, MoveKind>;

/// Every legal move of the side to move, keyed by source then destination.
/// Pieces without a legal move have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoveMap {
    moves: BTreeMap<Square, PieceMoves>,
}

impl LegalMoveMap {
    pub(crate) fn insert_piece_moves(&mut self, from: Square, targets: PieceMoves) {
        if !targets.is_empty() {
            self.moves.insert(from, targets);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Total number of (from, to) pairs.
    pub fn move_count(&self) -> usize {
        self.moves.values().map(BTreeMap::len).sum()
    }

    pub fn get(&self, from: Square, to: Square) -> Option<MoveKind> {
        self.moves.get(&from).and_then(|targets| targets.get(&to)).copied()
    }

    pub fn targets(&self, from: Square) -> Option<&PieceMoves> {
        self.moves.get(&from)
    }

    pub fn sources(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChessMove> + '_ {
        self.moves.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, kind)| ChessMove::new(*from, *to, *kind))
        })
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(
        &self,
        position: &Position,
        player: Color,
        ply: Ply,
        variant: Variant,
    ) -> MoveGenResult<LegalMoveMap>;
}
