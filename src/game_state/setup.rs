//! Initial positions for the supported variants.
//!
//! The standard layout is fixed. The 960 layout draws a back rank from an
//! injected random source so tests can reproduce it from a seed:
//! bishops on one even and one odd file, then the queen, then both knights on
//! random free files, and finally rook, king, rook on the three files left in
//! ascending order so the king always starts between its rooks.

use log::debug;
use rand::Rng;

use crate::game_state::chess_rules::STANDARD_BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, Variant};
use crate::game_state::position::Position;

pub fn standard_layout() -> Position {
    layout_from_back_rank(STANDARD_BACK_RANK)
}

pub fn shuffled_layout<R: Rng + ?Sized>(rng: &mut R) -> Position {
    layout_from_back_rank(shuffled_back_rank(rng))
}

/// Initial position for `variant`; only the 960 layout consumes randomness.
pub fn initial_layout<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Position {
    match variant {
        Variant::Standard => standard_layout(),
        Variant::Chess960 => shuffled_layout(rng),
    }
}

/// Back rank piece order, file a first.
pub fn shuffled_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    // Every file not assigned below keeps a rook.
    let mut back_rank = [PieceKind::Rook; 8];

    let even_bishop = rng.random_range(0..4usize) * 2;
    let odd_bishop = rng.random_range(0..4usize) * 2 + 1;
    back_rank[even_bishop] = PieceKind::Bishop;
    back_rank[odd_bishop] = PieceKind::Bishop;

    let mut free_files: Vec<usize> = (0..8)
        .filter(|file| *file != even_bishop && *file != odd_bishop)
        .collect();

    let queen = free_files.remove(rng.random_range(0..free_files.len()));
    back_rank[queen] = PieceKind::Queen;

    for _ in 0..2 {
        let knight = free_files.remove(rng.random_range(0..free_files.len()));
        back_rank[knight] = PieceKind::Knight;
    }

    // Three ascending files remain: rook, king, rook.
    back_rank[free_files[1]] = PieceKind::King;

    debug!("drew 960 back rank {back_rank:?}");
    back_rank
}

fn layout_from_back_rank(back_rank: [PieceKind; 8]) -> Position {
    let mut position = Position::empty();

    for (file_idx, kind) in back_rank.into_iter().enumerate() {
        let file = file_idx as u8 + 1;
        for color in [Color::Light, Color::Dark] {
            if let Some(square) = Square::from_file_rank(file, color.back_rank()) {
                position.set(square, Some(Piece::new(color, kind)));
            }
            if let Some(square) = Square::from_file_rank(file, color.pawn_start_rank()) {
                position.set(square, Some(Piece::new(color, PieceKind::Pawn)));
            }
        }
    }

    position
}
