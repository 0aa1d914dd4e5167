//! Turn rotation.
//!
//! Rotation is a fixed round-robin over the roster order, which is also
//! ascending token order. It does not depend on move history.

use crate::core::{Roster, Token};

/// Token after `current` in an ascending token sequence, wrapping around.
///
/// Returns `current` unchanged if it is not part of `order`.
#[must_use]
pub fn next_token(order: &[Token], current: Token) -> Token {
    match order.iter().position(|&t| t == current) {
        Some(i) => order[(i + 1) % order.len()],
        None => current,
    }
}

impl Roster {
    /// Next active player's token after `current`, skipping players who quit.
    ///
    /// Returns `None` when nobody else is still playing.
    #[must_use]
    pub fn next_after(&self, current: Token) -> Option<Token> {
        let count = self.len();
        let start = current.index();
        (1..=count)
            .map(|step| Token::for_index((start + step) % count))
            .filter(|&t| t != current)
            .find(|&t| self.by_token(t).is_some_and(|p| !p.has_quit))
    }
}
