//! Move descriptions: what a move does besides relocating a piece.
//!
//! A `ChessMove` pairs the from/to squares with a `MoveKind`; the kind fully
//! determines the side effects applied by `legal_move_apply::apply_move`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    Moving,
    Capture,
    /// Pawn advance of two squares from its starting rank.
    PawnBoost,
    EnPassant,
    Promotion,
    CaptureWithPromotion,
    KingsideCastling,
    QueensideCastling,
}

impl MoveKind {
    /// True for every kind that removes an opposing piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::CaptureWithPromotion
        )
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::CaptureWithPromotion)
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveKind::KingsideCastling | MoveKind::QueensideCastling)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Moving => "moving",
            MoveKind::Capture => "capture",
            MoveKind::PawnBoost => "pawnBoost",
            MoveKind::EnPassant => "enPassant",
            MoveKind::Promotion => "promotion",
            MoveKind::CaptureWithPromotion => "captureWithPromotion",
            MoveKind::KingsideCastling => "kingsideCastling",
            MoveKind::QueensideCastling => "queensideCastling",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.from, self.to, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessMove, MoveKind};
    use crate::game_state::chess_types::Square;

    #[test]
    fn kind_predicates() {
        assert!(MoveKind::EnPassant.is_capture());
        assert!(MoveKind::CaptureWithPromotion.is_capture());
        assert!(MoveKind::CaptureWithPromotion.is_promotion());
        assert!(!MoveKind::PawnBoost.is_capture());
        assert!(MoveKind::QueensideCastling.is_castling());
    }

    #[test]
    fn serializes_with_camel_case_kind() {
        let e2 = "e2".parse::<Square>().expect("e2 should parse");
        let e4 = "e4".parse::<Square>().expect("e4 should parse");
        let mv = ChessMove::new(e2, e4, MoveKind::PawnBoost);

        let json = serde_json::to_string(&mv).expect("move should serialize");
        assert_eq!(json, r#"{"from":"e2","to":"e4","kind":"pawnBoost"}"#);
        assert_eq!(mv.to_string(), "e2e4 (pawnBoost)");
    }
}
