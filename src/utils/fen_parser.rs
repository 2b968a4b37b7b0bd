//! FEN-to-Position reader for fixtures and regression positions.
//!
//! Only position notation is read; the per-piece flags the rules rely on are
//! derived from the optional FEN fields:
//! - castling rights decide whether kings and rooks count as moved,
//! - the en-passant square stamps the double-stepped pawn with the previous ply,
//! - side to move and fullmove number give the ply index.
//!
//! Halfmove clocks are accepted and ignored.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Ply, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// A parsed FEN: the position plus the side to move and the ply it is at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub position: Position,
    pub side_to_move: Color,
    pub ply: Ply,
}

/// Reads just the board field (`"rnbqkbnr/pppppppp/8/..."`). Kings and rooks
/// are unmoved; pawns off their starting rank are marked moved.
pub fn parse_fen_board(board_part: &str) -> ChessResult<Position> {
    Position::from_pieces(parse_board(board_part)?)
}

pub fn parse_fen_position(fen: &str) -> ChessResult<FenPosition> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next();
    let en_passant_part = parts.next().unwrap_or("-");
    let _halfmove_part = parts.next();
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut pieces = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let fullmove = fullmove_part
        .parse::<Ply>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| invalid(&format!("invalid fullmove number '{fullmove_part}'")))?;
    let ply = (fullmove - 1)
        .checked_mul(2)
        .and_then(|p| p.checked_add(side_to_move.index() as Ply))
        .ok_or_else(|| invalid("fullmove number is too large"))?;

    if let Some(castling_part) = castling_part {
        apply_castling_rights(&mut pieces, castling_part)?;
    }
    apply_en_passant_square(&mut pieces, en_passant_part, side_to_move, ply)?;

    Ok(FenPosition {
        position: Position::from_pieces(pieces)?,
        side_to_move,
        ply,
    })
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidPositionNotation(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(Square, Piece)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as u8;
        let mut file = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 9 {
                    return Err(invalid(&format!("rank {rank} has too many files")));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let square = Square::from_file_rank(file, rank)
                .ok_or_else(|| invalid(&format!("rank {rank} has too many files")))?;

            let mut piece = Piece::new(color, kind);
            piece.has_moved = kind == PieceKind::Pawn && rank != color.pawn_start_rank();
            pieces.push((square, piece));
            file += 1;
        }

        if file != 9 {
            return Err(invalid(&format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field '{side_part}'"))),
    }
}

/// Kings and rooks count as moved unless a matching right is listed.
fn apply_castling_rights(pieces: &mut [(Square, Piece)], castling_part: &str) -> ChessResult<()> {
    let mut rights = [[false; 2]; 2];
    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => rights[Color::Light.index()][0] = true,
                'Q' => rights[Color::Light.index()][1] = true,
                'k' => rights[Color::Dark.index()][0] = true,
                'q' => rights[Color::Dark.index()][1] = true,
                _ => return Err(invalid(&format!("invalid castling rights character '{ch}'"))),
            }
        }
    }

    for (square, piece) in pieces.iter_mut() {
        let [kingside, queenside] = rights[piece.owner.index()];
        let on_back_rank = square.rank() == piece.owner.back_rank();
        match piece.kind {
            PieceKind::King => {
                piece.has_moved = !(on_back_rank && square.file() == 5 && (kingside || queenside));
            }
            PieceKind::Rook => {
                piece.has_moved = !(on_back_rank
                    && ((square.file() == 8 && kingside) || (square.file() == 1 && queenside)));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Stamps the pawn that just passed the en-passant square with `ply - 1`.
fn apply_en_passant_square(
    pieces: &mut [(Square, Piece)],
    en_passant_part: &str,
    side_to_move: Color,
    ply: Ply,
) -> ChessResult<()> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = algebraic_to_square(en_passant_part)?;
    let mover = side_to_move.opposite();
    let expected_rank = match side_to_move {
        Color::Light => 6,
        Color::Dark => 3,
    };
    if target.rank() != expected_rank {
        return Err(invalid(&format!(
            "en-passant square {target} is not on rank {expected_rank}"
        )));
    }
    let pawn_square = target
        .offset(0, mover.pawn_step())
        .ok_or_else(|| invalid(&format!("impossible en-passant square {target}")))?;
    let previous_ply = ply
        .checked_sub(1)
        .ok_or_else(|| invalid("en-passant square given at ply 0"))?;

    let pawn = pieces
        .iter_mut()
        .find(|(square, piece)| *square == pawn_square && piece.is(mover, PieceKind::Pawn))
        .ok_or_else(|| invalid(&format!("no pawn passed through {target}")))?;
    pawn.1.has_moved = true;
    pawn.1.last_double_step_ply = Some(previous_ply);

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
