//! Thread-safe handle to one game.
//!
//! Writers (`play`, `undo`) hold the write lock for the whole transaction,
//! and `snapshot` copies ply, position, legal moves and outcome under a
//! single read lock, so a reader never sees a half-applied move.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::error;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::GameOutcome;
use crate::game_state::chess_types::{Color, Ply, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::LegalMoveMap;

/// Consistent copy of the latest ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub ply: Ply,
    pub side_to_move: Color,
    pub position: Position,
    pub legal_moves: LegalMoveMap,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<RwLock<GameState>>,
}

impl SharedGame {
    pub fn new(game: GameState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(game)),
        }
    }

    pub fn snapshot(&self) -> ChessResult<GameSnapshot> {
        let game = self.read()?;
        snapshot_of(&game)
    }

    /// Applies `from -> to` at the latest ply.
    pub fn play(&self, from: Square, to: Square) -> ChessResult<GameSnapshot> {
        let mut game = self.write()?;
        let ply = game.latest_ply();
        game.apply_move(ply, from, to)?;
        snapshot_of(&game)
    }

    pub fn undo(&self) -> ChessResult<GameSnapshot> {
        let mut game = self.write()?;
        game.undo()?;
        snapshot_of(&game)
    }

    fn read(&self) -> ChessResult<RwLockReadGuard<'_, GameState>> {
        self.inner.read().map_err(|_| {
            error!("shared game lock poisoned");
            ChessErrors::LockPoisoned
        })
    }

    fn write(&self) -> ChessResult<RwLockWriteGuard<'_, GameState>> {
        self.inner.write().map_err(|_| {
            error!("shared game lock poisoned");
            ChessErrors::LockPoisoned
        })
    }
}

fn snapshot_of(game: &GameState) -> ChessResult<GameSnapshot> {
    let ply = game.latest_ply();
    Ok(GameSnapshot {
        ply,
        side_to_move: game.side_to_move(ply)?,
        position: game.latest_position().clone(),
        legal_moves: game.legal_moves(ply)?,
        outcome: game.outcome(ply)?,
    })
}
