//! Core value types shared by every rules subsystem.
//!
//! Colors, piece kinds, pieces, squares, ply indices and the variant tag live
//! here. Squares are stored as a `0..64` index (`a1 == 0`, `h8 == 63`) while
//! exposing the 1-based file/rank coordinates used by the rest of the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::position::Position;

/// Half-move index into the ply history. Ply 0 is the initial position.
pub type Ply = u16;

/// Side to move. `Light` is player 0 (white), `Dark` is player 1 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "white")]
    Light,
    #[serde(rename = "black")]
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn advance.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank a pawn must stand on to advance two squares.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 2,
            Color::Dark => 7,
        }
    }

    /// Rank on which a pawn promotes.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 8,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 8,
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value used by the advantage indicator. Kings count as zero.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// A piece together with the history flags the rules depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Color,
    pub kind: PieceKind,
    /// Set once the piece has left its starting square (gates castling).
    pub has_moved: bool,
    /// Ply at which this pawn advanced two squares, if it just did.
    pub last_double_step_ply: Option<Ply>,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Color, kind: PieceKind) -> Self {
        Self {
            owner,
            kind,
            has_moved: false,
            last_double_step_ply: None,
        }
    }

    #[inline]
    pub fn is(&self, owner: Color, kind: PieceKind) -> bool {
        self.owner == owner && self.kind == kind
    }
}

/// A board square. Files and ranks are 1-based (`a1` is file 1, rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const E1: Square = Square(4);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// Builds a square from 1-based file and rank, `None` when off the board.
    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Self> {
        if file < 1 || file > 8 || rank < 1 || rank > 8 {
            return None;
        }
        Some(Square((rank - 1) * 8 + (file - 1)))
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Shifts the square by a file and rank delta, `None` when off the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file() as i8 + d_file;
        let rank = self.rank() as i8 + d_rank;
        if !(1..=8).contains(&file) || !(1..=8).contains(&rank) {
            return None;
        }
        Square::from_file_rank(file as u8, rank as u8)
    }

    /// Light squares are those where file + rank is odd (`a1` is dark).
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Iterates the squares of a one-bit-per-square mask, lowest index first.
#[derive(Debug, Clone, Copy)]
pub struct MaskSquares(u64);

impl Iterator for MaskSquares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square(index))
    }
}

#[inline]
pub const fn mask_squares(mask: u64) -> MaskSquares {
    MaskSquares(mask)
}

/// Mask bit for 0-based `(file, rank)` or 0 when off the board. Used by the
/// const attack-table generators.
pub(crate) const fn mask_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << (rank * 8 + file)
}

/// Starting layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    #[serde(rename = "standard", alias = "std")]
    Standard,
    #[serde(rename = "960", alias = "chess960")]
    Chess960,
}

impl Variant {
    pub const fn id(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Chess960 => "960",
        }
    }

    /// Castling is only offered outside the randomized layout.
    #[inline]
    pub const fn allows_castling(self) -> bool {
        matches!(self, Variant::Standard)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" | "std" => Ok(Variant::Standard),
            "960" | "chess960" => Ok(Variant::Chess960),
            _ => Err(ChessErrors::InvalidVariant(s.to_owned())),
        }
    }
}
