//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{mask_squares, Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::PieceMoves;
use crate::moves::move_descriptions::MoveKind;

/// What landing on `target` means for a non-pawn piece of `player`:
/// a plain move onto an empty square, a capture of an opposing non-king
/// piece, or nothing at all.
#[inline]
pub fn step_kind(position: &Position, target: Square, player: Color) -> Option<MoveKind> {
    if position.is_empty_square(target) {
        Some(MoveKind::Moving)
    } else if position.is_capturable_by(target, player) {
        Some(MoveKind::Capture)
    } else {
        None
    }
}

/// Classifies every square of `targets` with `step_kind`.
///
/// For sliders `targets` comes from a ray tracer that already includes the
/// first blocker, so a capturable blocker becomes a capture and any other
/// blocker is dropped.
pub fn collect_step_moves(position: &Position, targets: u64, player: Color) -> PieceMoves {
    mask_squares(targets)
        .filter_map(|to| step_kind(position, to, player).map(|kind| (to, kind)))
        .collect()
}
