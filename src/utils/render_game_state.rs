//! Terminal-oriented Unicode board renderer, used by `Display` for
//! `Position` and in test diagnostics.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Rank 8 on top, empty squares as `·`.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (1..=8u8).rev() {
        let label = char::from(b'0' + rank);
        out.push(label);
        out.push(' ');

        let row: Vec<String> = (1..=8u8)
            .filter_map(|file| Square::from_file_rank(file, rank))
            .map(|square| {
                position
                    .piece_at(square)
                    .map_or('·', piece_to_unicode)
                    .to_string()
            })
            .collect();
        out.push_str(&row.join(" "));

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
