use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::collect_step_moves;
use crate::move_generation::move_generator::PieceMoves;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(position: &Position, from: Square, player: Color) -> PieceMoves {
    collect_step_moves(position, queen_attacks(from, position.occupancy()), player)
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
    use crate::move_generation::legal_moves_rook::generate_rook_moves;
    use crate::utils::fen_parser::parse_fen_board;

    #[test]
    fn queen_moves_are_the_union_of_bishop_and_rook_moves() {
        let position = parse_fen_board("4k3/6p1/8/8/3Q4/8/1P6/4K3").expect("board should parse");
        let d4: Square = "d4".parse().expect("d4 should parse");

        let mut expected = generate_bishop_moves(&position, d4, Color::Light);
        expected.extend(generate_rook_moves(&position, d4, Color::Light));

        assert_eq!(generate_queen_moves(&position, d4, Color::Light), expected);
        assert_eq!(expected.len(), 24);
    }
}
