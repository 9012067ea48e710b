//! The game state manager: board history, current move and list order.
//!
//! A [`Timeline`] owns every board produced so far. Playing from an earlier
//! move discards the later boards; jumping only moves the pointer.

use super::action::{IgnoreReason, Intent, Transition};
use super::contracts::{Contract, PlayContract};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::order::SortOrder;
use super::rules::{self, Verdict};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Ordered board snapshots plus the pointer selecting the displayed one.
///
/// Invariants:
/// - `history[0]` is the empty board
/// - each snapshot adds exactly one mark to its predecessor, X first, then alternating
/// - `current_move < history.len()`
///
/// Deserialized timelines are checked against these invariants and
/// rejected when any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRecord")]
pub struct Timeline {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) order: SortOrder,
}

impl Timeline {
    /// Creates a timeline holding only the empty board, listed ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a fresh timeline with the given list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            order,
        }
    }

    /// Plays the given board indices in sequence from a fresh timeline.
    ///
    /// Ignored indices are skipped, as they would be for a click.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut timeline = Self::new();
        for &index in indices {
            timeline.apply_move(index);
        }
        timeline
    }

    /// All boards, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner and winning line of the displayed board.
    pub fn verdict(&self) -> Verdict {
        rules::evaluate(self.current_board())
    }

    /// Whether the displayed board is full without a winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Dispatches an input to the matching operation.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::Play(index) => self.apply_move(index),
            Intent::JumpTo(target) => self.jump_to(target),
            Intent::ToggleSort => self.toggle_sort_order(),
        }
    }

    /// Places the next player's mark at `index` on the displayed board.
    ///
    /// Later boards are discarded and the new board becomes current.
    /// Off-board indices, occupied squares and already-won boards are ignored.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.next_player()))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        let transition = Transition::from(self.try_move(index));
        match &transition {
            Transition::Applied => info!(current_move = self.current_move, "Move applied"),
            Transition::Ignored(IgnoreReason::InvariantViolation(detail)) => {
                error!(detail = %detail, "Move rejected by postcondition")
            }
            Transition::Ignored(reason) => debug!(reason = %reason, "Move ignored"),
        }
        transition
    }

    fn try_move(&mut self, index: usize) -> Result<(), IgnoreReason> {
        let pos = Position::from_index(index).ok_or(IgnoreReason::OffBoard(index))?;
        PlayContract::pre(self, &pos)?;

        let next = self.current_board().with_mark(pos, self.next_player());
        let mut candidate = self.clone();
        candidate.history.truncate(self.current_move + 1);
        candidate.history.push(next);
        candidate.current_move = candidate.history.len() - 1;

        #[cfg(debug_assertions)]
        PlayContract::post(self, &candidate)?;

        *self = candidate;
        Ok(())
    }

    /// Makes history entry `target` the displayed board.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn jump_to(&mut self, target: usize) -> Transition {
        if target >= self.history.len() {
            let reason = IgnoreReason::UnknownMove {
                requested: target,
                len: self.history.len(),
            };
            debug!(reason = %reason, "Jump ignored");
            return Transition::Ignored(reason);
        }

        self.current_move = target;
        debug!("Jumped");
        Transition::Applied
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_sort_order(&mut self) -> Transition {
        self.order = self.order.toggle();
        Transition::Applied
    }

    /// Starts over with an empty board, keeping the list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len() - 1, "Restarting");
        *self = Self::with_order(self.order);
    }
}

/// Unchecked wire form of a [`Timeline`].
#[derive(Deserialize)]
struct TimelineRecord {
    history: Vec<Board>,
    current_move: usize,
    order: SortOrder,
}

impl TryFrom<TimelineRecord> for Timeline {
    type Error = IgnoreReason;

    fn try_from(record: TimelineRecord) -> Result<Self, Self::Error> {
        let timeline = Self {
            history: record.history,
            current_move: record.current_move,
            order: record.order,
        };
        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            IgnoreReason::InvariantViolation(descriptions)
        })?;
        Ok(timeline)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
