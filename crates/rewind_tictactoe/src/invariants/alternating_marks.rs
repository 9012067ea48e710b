//! Alternating marks invariant: X, O, X, O, ...

use super::super::{Player, Square, Timeline};
use super::Invariant;

/// Invariant: the mark added by move `i` belongs to X when `i` is odd,
/// O when it is even, so X always opens.
///
/// Steps that do not add exactly one mark are left to
/// [`SingleStepInvariant`](super::SingleStepInvariant).
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => pair[1].get(*pos) == Square::Occupied(Player::for_move(step)),
                _ => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
