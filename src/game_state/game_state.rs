//! A single game session.
//!
//! `GameState` owns the ply history, the settings the game was created
//! with, and the legal moves of the latest ply. Every recorded position is
//! immutable; applying a move appends a new one and undo drops the last.
//! Light moves on even plies and Dark on odd plies.
//!
//! Switching the variant applies from the latest ply on. Earlier plies keep
//! answering with the variant they were played under.

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{evaluate_outcome, material_balance, GameOutcome};
use crate::game_state::chess_types::{Color, Ply, Square, Variant};
use crate::game_state::game_config::GameConfig;
use crate::game_state::ply_history::{HistoryNavigation, PlyHistory};
use crate::game_state::position::Position;
use crate::game_state::setup::initial_layout;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{LegalMoveMap, MoveGenerator};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_parser::parse_fen_position;

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    history: PlyHistory,
    latest_moves: LegalMoveMap,
    /// `(first ply, variant)` pairs in ascending ply order.
    variant_changes: Vec<(Ply, Variant)>,
}

impl GameState {
    /// Starts a game from the layout of `variant` ("standard", "std", "960"
    /// or "chess960"). `seed` only matters for 960.
    pub fn new_game(variant: &str, seed: Option<u64>) -> ChessResult<Self> {
        let variant = variant.parse::<Variant>().inspect_err(|err| warn!("{err}"))?;
        Self::with_config(GameConfig {
            variant,
            seed,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> ChessResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let position = initial_layout(config.variant, &mut rng);
        info!("new {} game (seed {:?})", config.variant, config.seed);

        Self::from_history(PlyHistory::new(position, 0), config)
    }

    /// Starts from an arbitrary position. The first recorded ply is 0 when
    /// Light is to move and 1 otherwise.
    pub fn from_position(position: Position, side_to_move: Color, config: GameConfig) -> ChessResult<Self> {
        let first_ply = side_to_move.index() as Ply;
        Self::from_history(PlyHistory::new(position, first_ply), config)
    }

    /// Starts from a FEN string; the first recorded ply is the one the FEN
    /// move counters describe.
    pub fn from_fen(fen: &str, config: GameConfig) -> ChessResult<Self> {
        let parsed = parse_fen_position(fen)?;
        Self::from_history(PlyHistory::new(parsed.position, parsed.ply), config)
    }

    fn from_history(history: PlyHistory, config: GameConfig) -> ChessResult<Self> {
        let mut game = Self {
            config,
            history,
            latest_moves: LegalMoveMap::default(),
            variant_changes: Vec::new(),
        };
        game.pin_variant();
        game.refresh_latest_moves()?;
        Ok(game)
    }

    fn refresh_latest_moves(&mut self) -> ChessResult<()> {
        let ply = self.history.latest_ply();
        self.latest_moves = LegalMoveGenerator.generate_legal_moves(
            self.history.latest(),
            side_to_move_at(ply),
            ply,
            self.config.variant,
        )?;
        Ok(())
    }

    /// Makes the configured variant the one in force from the latest ply on.
    fn pin_variant(&mut self) {
        let ply = self.history.latest_ply();
        self.variant_changes.retain(|(start, _)| *start < ply);
        if self.variant_changes.last().map(|(_, variant)| *variant) != Some(self.config.variant) {
            self.variant_changes.push((ply, self.config.variant));
        }
    }

    fn variant_at(&self, ply: Ply) -> Variant {
        self.variant_changes
            .iter()
            .rev()
            .find(|(start, _)| *start <= ply)
            .map_or(self.config.variant, |(_, variant)| *variant)
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Switches the rule set used from the latest ply on. Recorded positions
    /// and the variant of earlier plies are kept.
    pub fn set_variant(&mut self, id: &str) -> ChessResult<()> {
        let variant = id.parse::<Variant>().inspect_err(|err| warn!("{err}"))?;
        self.config.variant = variant;
        self.pin_variant();
        self.refresh_latest_moves()
    }

    #[inline]
    pub fn latest_ply(&self) -> Ply {
        self.history.latest_ply()
    }

    pub fn position(&self, ply: Ply) -> ChessResult<&Position> {
        self.history.get(ply)
    }

    #[inline]
    pub fn latest_position(&self) -> &Position {
        self.history.latest()
    }

    pub fn side_to_move(&self, ply: Ply) -> ChessResult<Color> {
        self.history.get(ply)?;
        Ok(side_to_move_at(ply))
    }

    pub fn is_in_check(&self, ply: Ply) -> ChessResult<bool> {
        is_king_in_check(self.history.get(ply)?, side_to_move_at(ply))
    }

    /// Legal moves of the side to move at `ply`, under the variant that was
    /// in force at that ply.
    pub fn legal_moves(&self, ply: Ply) -> ChessResult<LegalMoveMap> {
        if ply == self.history.latest_ply() {
            return Ok(self.latest_moves.clone());
        }

        let position = self.history.get(ply)?;
        LegalMoveGenerator.generate_legal_moves(position, side_to_move_at(ply), ply, self.variant_at(ply))
    }

    /// Plays `from -> to` on top of `ply`, which must be the latest ply.
    /// On error nothing changes, including when the ply counter is exhausted.
    pub fn apply_move(&mut self, ply: Ply, from: Square, to: Square) -> ChessResult<&Position> {
        let latest = self.history.latest_ply();
        if ply != latest {
            self.history.get(ply)?;
            return Err(ChessErrors::NotLatestPly {
                requested: ply,
                latest,
            });
        }

        let Some(kind) = self.latest_moves.get(from, to) else {
            debug!("rejected {from}{to} at ply {ply}");
            return Err(ChessErrors::IllegalMove { from, to, ply });
        };

        let mv = ChessMove::new(from, to, kind);
        let next = apply_move(self.history.latest(), mv, ply)?;
        self.history.push(next).inspect_err(|err| warn!("{err}"))?;
        self.refresh_latest_moves()?;
        debug!("ply {ply}: {mv}");
        trace!("\n{}", self.history.latest());

        let outcome = self.outcome(self.history.latest_ply())?;
        if outcome.is_terminal() {
            info!("game over at ply {}: {outcome:?}", self.history.latest_ply());
        }

        Ok(self.history.latest())
    }

    /// Drops the latest ply and returns the position that is now latest.
    pub fn undo(&mut self) -> ChessResult<&Position> {
        self.history.pop()?;
        self.pin_variant();
        self.refresh_latest_moves()?;
        debug!("undo to ply {}", self.history.latest_ply());
        Ok(self.history.latest())
    }

    pub fn outcome(&self, ply: Ply) -> ChessResult<GameOutcome> {
        let position = self.history.get(ply)?;
        let moves = self.legal_moves(ply)?;
        evaluate_outcome(
            position,
            &moves,
            side_to_move_at(ply),
            self.config.insufficient_material_rules(),
        )
    }

    pub fn material_balance(&self, ply: Ply) -> ChessResult<i32> {
        Ok(material_balance(self.history.get(ply)?))
    }

    #[inline]
    pub fn view_ply(&self) -> Ply {
        self.history.view_ply()
    }

    /// Moves the view pointer; the game itself is untouched.
    pub fn navigate(&mut self, navigation: HistoryNavigation) -> &Position {
        self.history.navigate(navigation);
        self.history.viewed()
    }

    #[inline]
    pub fn viewed_position(&self) -> &Position {
        self.history.viewed()
    }
}

#[inline]
const fn side_to_move_at(ply: Ply) -> Color {
    if ply % 2 == 0 {
        Color::Light
    } else {
        Color::Dark
    }
}
