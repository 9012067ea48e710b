//! Contract-based validation for timeline moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. A failed precondition means the
//! input is ignored; a failed postcondition means the candidate timeline
//! is dropped before it replaces the current one.

use super::action::IgnoreReason;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules;
use super::timeline::Timeline;
use super::Position;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IgnoreReason>;

    /// Checks postconditions on the state produced by the action.
    fn post(before: &S, after: &S) -> Result<(), IgnoreReason>;
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`IgnoreReason::SquareOccupied`] when `pos` is taken.
    #[instrument(skip(timeline))]
    pub fn check(pos: &Position, timeline: &Timeline) -> Result<(), IgnoreReason> {
        if timeline.current_board().is_empty(*pos) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(*pos))
        }
    }
}

/// Precondition: the displayed board must not already be won.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`IgnoreReason::GameOver`] when the board has a line.
    #[instrument(skip(timeline))]
    pub fn check(timeline: &Timeline) -> Result<(), IgnoreReason> {
        match rules::check_winner(timeline.current_board()) {
            Some(_) => Err(IgnoreReason::GameOver),
            None => Ok(()),
        }
    }
}

/// Composite precondition for playing a square.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a move.
    #[instrument(skip(timeline))]
    pub fn check(pos: &Position, timeline: &Timeline) -> Result<(), IgnoreReason> {
        SquareIsEmpty::check(pos, timeline)?;
        NoWinnerYet::check(timeline)?;
        Ok(())
    }
}

/// Contract for playing a square.
///
/// Preconditions:
/// - Square must be empty
/// - Displayed board must have no winner
///
/// Postconditions:
/// - History ends right after the move played from
/// - The new board is current
/// - Every timeline invariant holds
pub struct PlayContract;

impl Contract<Timeline, Position> for PlayContract {
    fn pre(timeline: &Timeline, pos: &Position) -> Result<(), IgnoreReason> {
        LegalPlay::check(pos, timeline)
    }

    fn post(before: &Timeline, after: &Timeline) -> Result<(), IgnoreReason> {
        if after.history().len() != before.current_move() + 2 {
            return Err(IgnoreReason::InvariantViolation(format!(
                "Postcondition failed: history has {} boards after playing from move #{}",
                after.history().len(),
                before.current_move()
            )));
        }

        if after.current_move() + 1 != after.history().len() {
            return Err(IgnoreReason::InvariantViolation(
                "Postcondition failed: new board is not current".to_string(),
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            IgnoreReason::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_legal_play_on_empty_board() {
        let timeline = Timeline::new();
        assert!(LegalPlay::check(&Position::Center, &timeline).is_ok());
    }

    #[test]
    fn test_occupied_square_fails_precondition() {
        let timeline = Timeline::replay(&[4]);
        assert_eq!(
            PlayContract::pre(&timeline, &Position::Center),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_won_board_fails_precondition() {
        let timeline = Timeline::replay(&[0, 3, 1, 4, 2]);
        assert_eq!(
            PlayContract::pre(&timeline, &Position::BottomRight),
            Err(IgnoreReason::GameOver)
        );
    }

    #[test]
    fn test_postcondition_accepts_real_move() {
        let before = Timeline::replay(&[0, 1]);
        let mut after = before.clone();
        after.apply_move(2);

        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_rejects_corrupted_board() {
        let before = Timeline::new();
        let mut after = before.clone();
        // Two marks in one step.
        let mut bad = crate::Board::new();
        bad.set(Position::TopLeft, Square::Occupied(Player::X));
        bad.set(Position::Center, Square::Occupied(Player::X));
        after.history.push(bad);
        after.current_move = 1;

        assert!(matches!(
            PlayContract::post(&before, &after),
            Err(IgnoreReason::InvariantViolation(_))
        ));
    }
}
