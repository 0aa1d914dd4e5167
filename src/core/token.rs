//! Player tokens and the game roster.
//!
//! ## Token
//!
//! Type-safe token identifier. Tokens are handed out once, at game creation,
//! in player-list order: the first player gets `Token(1)`.
//!
//! ## Roster
//!
//! The ordered list of participants. The roster order never changes after
//! creation, so turn rotation walks it directly instead of re-sorting tokens.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Token occupying board cells on behalf of one player.
///
/// Tokens are 1-based: the first player is `Token(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(pub u8);

impl Token {
    /// The token given to the first player.
    pub const FIRST: Token = Token(1);

    /// Create a new token.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Token for the player at `index` (0-based) in the roster.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Roster index (0-based) of the player holding this token.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// A registered participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within the game.
    pub name: String,

    /// Token assigned at creation.
    pub token: Token,

    /// Set once the player quits. Quit players are skipped by the rotation.
    pub has_quit: bool,
}

/// Ordered participants of one game.
///
/// Backed by a `SmallVec` sized for the common two-player case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: SmallVec<[Player; 2]>,
}

impl Roster {
    /// Most players a roster can hold (tokens are `u8`, starting at 1).
    pub const MAX_PLAYERS: usize = 255;

    /// Build a roster from player names, assigning tokens in order.
    ///
    /// Name uniqueness and player count are checked by the caller.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .take(Self::MAX_PLAYERS)
            .enumerate()
            .map(|(i, name)| Player {
                name: name.into(),
                token: Token::for_index(i),
                has_quit: false,
            })
            .collect();

        Self { players }
    }

    /// Number of registered players, including those who quit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Look up the player holding `token`.
    #[must_use]
    pub fn by_token(&self, token: Token) -> Option<&Player> {
        self.players.get(token.index()).filter(|p| p.token == token)
    }

    /// Mark a player as quit. Returns false if the token is unknown.
    pub fn mark_quit(&mut self, token: Token) -> bool {
        match self.players.get_mut(token.index()) {
            Some(p) if p.token == token => {
                p.has_quit = true;
                true
            }
            _ => false,
        }
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Iterate over players who have not quit, in roster order.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.has_quit)
    }

    /// Player names in roster order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Tokens in roster order (ascending by construction).
    #[must_use]
    pub fn tokens(&self) -> SmallVec<[Token; 2]> {
        self.players.iter().map(|p| p.token).collect()
    }
}
