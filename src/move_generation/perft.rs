use std::sync::Arc;
use std::thread;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Ply, Variant};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::utils::fen_parser::parse_fen_position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Where a perft run starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftRoot {
    pub position: Position,
    pub player: Color,
    pub ply: Ply,
    pub variant: Variant,
}

impl PerftRoot {
    pub fn from_fen(fen: &str, variant: Variant) -> MoveGenResult<Self> {
        let parsed = parse_fen_position(fen)?;
        Ok(Self {
            position: parsed.position,
            player: parsed.side_to_move,
            ply: parsed.ply,
            variant,
        })
    }
}

pub fn perft_legal(root: &PerftRoot, depth: u8) -> MoveGenResult<PerftCounts> {
    perft_single_thread(&LegalMoveGenerator, root, depth)
}

pub fn perft<G: MoveGenerator>(generator: &G, root: &PerftRoot, depth: u8) -> MoveGenResult<PerftCounts> {
    perft_single_thread(generator, root, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    root: &PerftRoot,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(
        generator,
        &root.position,
        root.player,
        root.ply,
        root.variant,
        depth,
        &mut total,
    )?;
    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    root: &PerftRoot,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(&root.position, root.player, root.ply, root.variant)?;
    let mut handles = Vec::with_capacity(root_moves.move_count());

    for mv in root_moves.iter() {
        let generator_ref = Arc::clone(&generator);
        let root = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = visit_move(
                generator_ref.as_ref(),
                &root.position,
                mv,
                root.player,
                root.ply,
                root.variant,
                depth,
                &mut local,
            );
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().map_err(|_| ChessErrors::WorkerPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    player: Color,
    ply: Ply,
    variant: Variant,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(position, player, ply, variant)?;
    for mv in moves.iter() {
        visit_move(generator, position, mv, player, ply, variant, depth, counts)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn visit_move<G: MoveGenerator + ?Sized>(
    generator: &G,
    position: &Position,
    mv: ChessMove,
    player: Color,
    ply: Ply,
    variant: Variant,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let next = apply_move(position, mv, ply)?;
    let next_ply = ply.saturating_add(1);

    if depth > 1 {
        return perft_recurse(generator, &next, player.opposite(), next_ply, variant, depth - 1, counts);
    }

    counts.nodes += 1;
    if mv.kind.is_capture() {
        counts.captures += 1;
    }
    if mv.kind == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if mv.kind.is_castling() {
        counts.castles += 1;
    }
    if mv.kind.is_promotion() {
        counts.promotions += 1;
    }

    if is_king_in_check(&next, player.opposite())? {
        counts.checks += 1;
        let replies = generator.generate_legal_moves(&next, player.opposite(), next_ply, variant)?;
        if replies.is_empty() {
            counts.checkmates += 1;
        }
    }

    Ok(())
}
