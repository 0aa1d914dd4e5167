//! Move listing over a 0-indexed, inclusive range.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Requested slice of the move log.
///
/// Both ends are 0-indexed and inclusive. Missing or negative `start` means
/// the first move; missing, negative or too large `until` means the last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRange {
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub until: Option<i64>,
}

impl MoveRange {
    /// The whole log.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            until: None,
        }
    }

    /// Range with both ends given.
    #[must_use]
    pub const fn new(start: i64, until: i64) -> Self {
        Self {
            start: Some(start),
            until: Some(until),
        }
    }

    /// Clamp to a log of `total` moves.
    ///
    /// Returns `None` when `start` lies beyond the log; an inverted range
    /// resolves to an empty one.
    #[must_use]
    pub fn resolve(self, total: usize) -> Option<(usize, usize)> {
        let start = self.start.unwrap_or(0).max(0);
        if start >= total as i64 {
            return None;
        }
        let last = total as i64 - 1;
        let until = match self.until {
            Some(u) if (0..=last).contains(&u) => u,
            _ => last,
        };
        Some((start as usize, until as usize))
    }
}

/// Moves in `range`, in turn order. `None` when `range` starts past the log.
#[must_use]
pub fn select(moves: &Vector<Move>, range: MoveRange) -> Option<Vec<Move>> {
    let (start, until) = range.resolve(moves.len())?;
    Some(
        moves
            .iter()
            .skip(start)
            .take((until + 1).saturating_sub(start))
            .cloned()
            .collect(),
    )
}
