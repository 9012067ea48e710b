//! First-class invariants for the timeline.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and back the move postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod empty_origin;
pub mod single_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    EmptyOriginInvariant,
    SingleStepInvariant,
    AlternatingMarksInvariant,
    CursorInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, Timeline};

    #[test]
    fn test_invariant_set_holds_for_new_timeline() {
        assert!(TimelineInvariants::check_all(&Timeline::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut timeline = Timeline::replay(&[0, 4, 8, 2]);
        timeline.jump_to(1);
        timeline.apply_move(6);

        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut timeline = Timeline::replay(&[4]);
        // O where X belongs, plus a stray mark on the origin board.
        timeline.history[1].set(Position::Center, Square::Occupied(Player::O));
        timeline.history[0].set(Position::TopLeft, Square::Occupied(Player::X));

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == EmptyOriginInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&Timeline::replay(&[0, 1])).is_ok());
    }
}
