//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by position construction,
//! move generation, the game session and the parsing helpers. Callers match
//! on it to tell input problems (illegal moves, bad notation, unknown variant)
//! apart from invariant violations such as `MissingKing`, which the engine's
//! own operations never produce.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Ply, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The requested `(from, to)` pair is not in the legal-move map of the ply.
    #[error("illegal move {from}{to} at ply {ply}")]
    IllegalMove { from: Square, to: Square, ply: Ply },

    /// Undo was requested while only the initial position is recorded.
    #[error("there is no move to undo")]
    NoMoveToUndo,

    /// The variant identifier is not one of the supported layouts.
    #[error("unknown variant '{0}', expected \"standard\" or \"960\"")]
    InvalidVariant(String),

    /// A position without a king for one side reached the rule code.
    ///
    /// Setup and move application never remove a king, so this indicates a
    /// corrupted position built by hand rather than a recoverable condition.
    #[error("position does not contain a king for {0:?}")]
    MissingKing(Color),

    /// The requested ply has not been played (or was undone).
    #[error("ply {requested} is not recorded, latest ply is {latest}")]
    PlyOutOfRange { requested: Ply, latest: Ply },

    /// Moves are only accepted on top of the latest recorded ply.
    #[error("moves can only be applied at the latest ply {latest}, not at ply {requested}")]
    NotLatestPly { requested: Ply, latest: Ply },

    /// The game already reached the last ply the counter can represent.
    #[error("no more plies can be recorded after ply {0}")]
    PlyLimitReached(Ply),

    /// Tried to move a piece from an empty square.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// Tried to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// A coordinate string such as "e4" failed to parse.
    #[error("invalid algebraic square '{0}'")]
    InvalidAlgebraicString(String),

    /// A FEN-style position string failed to parse or describes an
    /// impossible board.
    #[error("invalid position notation: {0}")]
    InvalidPositionNotation(String),

    /// A configuration document failed to deserialize.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// A thread panicked while holding a shared game lock.
    #[error("shared game lock was poisoned")]
    LockPoisoned,

    #[error("perft worker thread panicked")]
    WorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessErrors>;
