//! Single step invariant: each snapshot adds exactly one mark.

use super::super::{Square, Timeline};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// goes from empty to occupied.
///
/// Marks are never removed or overwritten.
pub struct SingleStepInvariant;

impl Invariant<Timeline> for SingleStepInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_played_timeline_holds() {
        let timeline = Timeline::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(timeline.history().len(), 10);
        assert!(SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut timeline = Timeline::replay(&[4, 0]);
        // O overwrites X in the center instead of taking a fresh square.
        timeline.history[2] = timeline.history[1];
        timeline.history[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&timeline));
    }

    #[test]
    fn test_repeated_board_violates() {
        let mut timeline = Timeline::replay(&[4]);
        timeline.history.push(timeline.history[1]);
        assert!(!SingleStepInvariant::holds(&timeline));
    }
}
