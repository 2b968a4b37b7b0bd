//! Attack detection: is a square attacked by a given side?
//!
//! This is the single check used for king safety, both when filtering
//! simulated moves and when validating the squares a castling king crosses.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::bishop_moves::{bishop_attacks, BISHOP_RAYS};
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::{queen_attacks, QUEEN_RAYS};
use crate::moves::rook_moves::{rook_attacks, ROOK_RAYS};

#[inline]
pub fn king_square(position: &Position, color: Color) -> MoveGenResult<Square> {
    position
        .king_square(color)
        .ok_or(ChessErrors::MissingKing(color))
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> MoveGenResult<bool> {
    let king_sq = king_square(position, color)?;
    Ok(is_square_attacked(position, king_sq, color.opposite()))
}

/// Scans every piece of `attacker_color` and stops at the first one that
/// attacks `square`. Sliders are blocked by the first occupied square of
/// either color.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    let occupancy = position.occupancy();
    position
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks_square(piece.kind, attacker_color, from, square, occupancy))
}

fn piece_attacks_square(
    kind: PieceKind,
    color: Color,
    from: Square,
    target: Square,
    occupancy: u64,
) -> bool {
    let target_mask = target.mask();
    match kind {
        PieceKind::Pawn => pawn_attacks(color, from) & target_mask != 0,
        PieceKind::Knight => knight_targets(from) & target_mask != 0,
        PieceKind::Bishop => {
            BISHOP_RAYS[from.index()] & target_mask != 0
                && bishop_attacks(from, occupancy) & target_mask != 0
        }
        PieceKind::Rook => {
            ROOK_RAYS[from.index()] & target_mask != 0
                && rook_attacks(from, occupancy) & target_mask != 0
        }
        PieceKind::Queen => {
            QUEEN_RAYS[from.index()] & target_mask != 0
                && queen_attacks(from, occupancy) & target_mask != 0
        }
        // King contact is enforced by the adjacency rule in king move generation.
        PieceKind::King => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, king_square};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::setup::standard_layout;
    use crate::utils::fen_parser::parse_fen_board;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn pawn_direction_follows_the_attacker() {
        let position = parse_fen_board("4k3/8/8/3p4/8/8/4P3/4K3").expect("board should parse");

        assert!(is_square_attacked(&position, sq("d3"), Color::Light));
        assert!(is_square_attacked(&position, sq("f3"), Color::Light));
        assert!(!is_square_attacked(&position, sq("d1"), Color::Light));
        assert!(is_square_attacked(&position, sq("c4"), Color::Dark));
        assert!(is_square_attacked(&position, sq("e4"), Color::Dark));
        assert!(!is_square_attacked(&position, sq("e6"), Color::Dark));
    }

    #[test]
    fn first_blocker_stops_sliders() {
        let position = parse_fen_board("4k3/8/8/8/r2N3K/8/8/8").expect("board should parse");

        assert!(is_square_attacked(&position, sq("d4"), Color::Dark));
        assert!(!is_square_attacked(&position, sq("e4"), Color::Dark));
        assert!(!is_square_attacked(&position, sq("h4"), Color::Dark));
        assert!(is_square_attacked(&position, sq("a8"), Color::Dark));
    }

    #[test]
    fn knights_jump_over_blockers() {
        let position = standard_layout();

        assert!(is_square_attacked(&position, sq("f3"), Color::Light));
        assert!(is_square_attacked(&position, sq("a6"), Color::Dark));
        assert!(!is_square_attacked(&position, sq("e4"), Color::Light));
    }

    #[test]
    fn detects_check_on_the_king() {
        let checked = parse_fen_board("4k3/8/8/8/8/8/8/q3K3").expect("board should parse");
        let shielded = parse_fen_board("4k3/8/8/8/8/8/8/q2BK3").expect("board should parse");

        assert_eq!(is_king_in_check(&checked, Color::Light), Ok(true));
        assert_eq!(is_king_in_check(&shielded, Color::Light), Ok(false));
        assert_eq!(is_king_in_check(&checked, Color::Dark), Ok(false));
        assert_eq!(king_square(&checked, Color::Dark), Ok(Square::E8));
    }

    #[test]
    fn kings_do_not_register_attacks() {
        let position = parse_fen_board("8/8/8/8/8/4k3/8/4K3").expect("board should parse");
        assert!(!is_square_attacked(&position, sq("e2"), Color::Dark));
        assert_eq!(king_square(&position, Color::Light), Ok(Square::E1));
        assert_ne!(king_square(&position, Color::Light), Err(ChessErrors::MissingKing(Color::Light)));
    }
}
