//! Presentation order of the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Only affects presentation; history and the current move are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that flips the order away from `self`.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }

    /// Move indices `0..len` in this order.
    pub fn arrange(self, len: usize) -> Vec<usize> {
        match self {
            Self::Ascending => (0..len).collect(),
            Self::Descending => (0..len).rev().collect(),
        }
    }
}
