//! King step table and the king-proximity rule.

use crate::game_state::chess_types::{mask_if_on_board, Square};

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

/// The (up to eight) squares adjacent to `square`.
#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square.index()]
}

/// True when the two squares touch horizontally, vertically or diagonally.
#[inline]
pub const fn are_adjacent(a: Square, b: Square) -> bool {
    king_targets(a) & b.mask() != 0
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut d_file = -1;

        while d_file <= 1 {
            let mut d_rank = -1;
            while d_rank <= 1 {
                if d_file != 0 || d_rank != 0 {
                    targets |= mask_if_on_board(file + d_file, rank + d_rank);
                }
                d_rank += 1;
            }
            d_file += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{are_adjacent, king_targets};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_target_counts() {
        assert_eq!(king_targets(Square::A1).count_ones(), 3);
        assert_eq!(king_targets(Square::E1).count_ones(), 5);
        let d4 = "d4".parse::<Square>().expect("d4 should parse");
        assert_eq!(king_targets(d4).count_ones(), 8);
    }

    #[test]
    fn adjacency_is_symmetric_and_excludes_self() {
        let e2 = "e2".parse::<Square>().expect("e2 should parse");
        let e3 = "e3".parse::<Square>().expect("e3 should parse");
        assert!(are_adjacent(Square::E1, e2));
        assert!(are_adjacent(e2, Square::E1));
        assert!(!are_adjacent(Square::E1, e3));
        assert!(!are_adjacent(Square::E1, Square::E1));
    }
}
