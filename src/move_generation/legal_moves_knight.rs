use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::collect_step_moves;
use crate::move_generation::move_generator::PieceMoves;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(position: &Position, from: Square, player: Color) -> PieceMoves {
    collect_step_moves(position, knight_targets(from), player)
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::setup::standard_layout;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::fen_parser::parse_fen_board;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn knight_on_b1_has_two_moves_at_the_start() {
        let moves = generate_knight_moves(&standard_layout(), sq("b1"), Color::Light);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.get(&sq("a3")), Some(&MoveKind::Moving));
        assert_eq!(moves.get(&sq("c3")), Some(&MoveKind::Moving));
    }

    #[test]
    fn knight_captures_but_never_takes_a_king() {
        let position = parse_fen_board("8/8/2k5/1p6/3N4/8/4P3/4K3").expect("board should parse");
        let moves = generate_knight_moves(&position, sq("d4"), Color::Light);

        assert_eq!(moves.get(&sq("b5")), Some(&MoveKind::Capture));
        assert_eq!(moves.get(&sq("c6")), None);
        assert_eq!(moves.get(&sq("e2")), None);
        assert_eq!(moves.len(), 6);
    }
}
