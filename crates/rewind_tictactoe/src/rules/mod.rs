//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules are kept apart
//! from the timeline so the same evaluation serves moves, status text and
//! invariant checks.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Verdict, check_winner, evaluate};
