//! Positions recorded per ply, plus a view pointer for browsing them.
//!
//! Plies are absolute: the first recorded position sits at `first_ply`,
//! which is 0 for games set up from scratch. The view pointer only affects
//! what `viewed` returns; moves are always recorded at the end.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Ply;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryNavigation {
    First,
    Previous,
    Next,
    Last,
}

#[derive(Debug, Clone)]
pub struct PlyHistory {
    first_ply: Ply,
    initial: Position,
    played: Vec<Position>,
    view_ply: Ply,
}

impl PlyHistory {
    pub fn new(initial: Position, first_ply: Ply) -> Self {
        Self {
            first_ply,
            initial,
            played: Vec::new(),
            view_ply: first_ply,
        }
    }

    #[inline]
    pub fn first_ply(&self) -> Ply {
        self.first_ply
    }

    #[inline]
    pub fn latest_ply(&self) -> Ply {
        self.first_ply + self.played.len() as Ply
    }

    pub fn latest(&self) -> &Position {
        self.played.last().unwrap_or(&self.initial)
    }

    pub fn get(&self, ply: Ply) -> ChessResult<&Position> {
        let latest = self.latest_ply();
        if ply < self.first_ply || ply > latest {
            return Err(ChessErrors::PlyOutOfRange {
                requested: ply,
                latest,
            });
        }

        let offset = usize::from(ply - self.first_ply);
        Ok(match offset.checked_sub(1) {
            None => &self.initial,
            Some(index) => &self.played[index],
        })
    }

    /// Records the position after the latest ply and moves the view to it.
    /// Nothing is recorded once the ply counter is exhausted.
    pub fn push(&mut self, position: Position) -> ChessResult<Ply> {
        let latest = self.latest_ply();
        let next = latest.checked_add(1).ok_or(ChessErrors::PlyLimitReached(latest))?;
        self.played.push(position);
        self.view_ply = next;
        Ok(next)
    }

    /// Drops the latest position. The initial position can't be removed.
    pub fn pop(&mut self) -> ChessResult<Position> {
        let removed = self.played.pop().ok_or(ChessErrors::NoMoveToUndo)?;
        self.view_ply = self.latest_ply();
        Ok(removed)
    }

    #[inline]
    pub fn view_ply(&self) -> Ply {
        self.view_ply
    }

    pub fn navigate(&mut self, navigation: HistoryNavigation) -> Ply {
        self.view_ply = match navigation {
            HistoryNavigation::First => self.first_ply,
            HistoryNavigation::Previous => self.view_ply.saturating_sub(1).max(self.first_ply),
            HistoryNavigation::Next => self.view_ply.saturating_add(1).min(self.latest_ply()),
            HistoryNavigation::Last => self.latest_ply(),
        };
        self.view_ply
    }

    pub fn viewed(&self) -> &Position {
        self.get(self.view_ply).unwrap_or_else(|_| self.latest())
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryNavigation, PlyHistory};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Ply;
    use crate::game_state::setup::standard_layout;
    use crate::moves::move_descriptions::{ChessMove, MoveKind};

    fn history_with_two_moves() -> PlyHistory {
        let start = standard_layout();
        let first = start
            .apply(ChessMove::new("e2".parse().expect("e2"), "e4".parse().expect("e4"), MoveKind::PawnBoost), 0)
            .expect("move should apply");
        let second = first
            .apply(ChessMove::new("e7".parse().expect("e7"), "e5".parse().expect("e5"), MoveKind::PawnBoost), 1)
            .expect("move should apply");

        let mut history = PlyHistory::new(start, 0);
        assert_eq!(history.push(first), Ok(1));
        assert_eq!(history.push(second), Ok(2));
        history
    }

    #[test]
    fn get_rejects_unrecorded_plies() {
        let history = history_with_two_moves();
        assert_eq!(history.get(0).ok(), Some(&standard_layout()));
        assert_eq!(
            history.get(3),
            Err(ChessErrors::PlyOutOfRange { requested: 3, latest: 2 })
        );

        let offset = PlyHistory::new(standard_layout(), 7);
        assert_eq!(offset.latest_ply(), 7);
        assert!(offset.get(6).is_err());
        assert!(offset.get(7).is_ok());
    }

    #[test]
    fn push_stops_at_the_last_representable_ply() {
        let mut history = PlyHistory::new(standard_layout(), Ply::MAX - 1);
        assert_eq!(history.push(standard_layout()), Ok(Ply::MAX));
        assert_eq!(history.push(standard_layout()), Err(ChessErrors::PlyLimitReached(Ply::MAX)));
        assert_eq!(history.latest_ply(), Ply::MAX);
        assert_eq!(history.view_ply(), Ply::MAX);
        assert!(history.get(Ply::MAX).is_ok());
    }

    #[test]
    fn navigation_clamps_to_recorded_plies() {
        let mut history = history_with_two_moves();
        assert_eq!(history.view_ply(), 2);
        assert_eq!(history.navigate(HistoryNavigation::Next), 2);
        assert_eq!(history.navigate(HistoryNavigation::Previous), 1);
        assert_eq!(history.navigate(HistoryNavigation::First), 0);
        assert_eq!(history.navigate(HistoryNavigation::Previous), 0);
        assert_eq!(history.viewed(), &standard_layout());
        assert_eq!(history.navigate(HistoryNavigation::Last), 2);
        assert_eq!(history.viewed(), history.latest());
    }

    #[test]
    fn pop_stops_at_the_initial_position() {
        let mut history = history_with_two_moves();
        history.navigate(HistoryNavigation::First);

        assert!(history.pop().is_ok());
        assert_eq!(history.view_ply(), 1);
        assert!(history.pop().is_ok());
        assert_eq!(history.pop(), Err(ChessErrors::NoMoveToUndo));
        assert_eq!(history.latest(), &standard_layout());
    }
}
