//! Game state: roster, dimensions, status, turn and the move log.
//!
//! There is no board in here. The move log is the only source of board
//! truth; `history::replay` rebuilds the grid whenever it is needed.
//!
//! The log is an `im::Vector`, so cloning a `GameState` for a
//! validate-then-apply cycle is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::token::{Player, Roster, Token};
use crate::board::Dimensions;
use crate::error::GameError;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Token),
    /// Board filled with no winning run.
    Draw,
}

impl GameResult {
    /// Check if a token won.
    #[must_use]
    pub fn is_winner(&self, token: Token) -> bool {
        matches!(self, GameResult::Winner(t) if *t == token)
    }
}

/// Lifecycle status. `Done` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Done(GameResult),
}

impl GameStatus {
    /// Wire label: `IN_PROGRESS` or `DONE`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Done(_) => "DONE",
        }
    }

    /// Check if the game has finished.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, GameStatus::Done(_))
    }
}

/// Persisted state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    roster: Roster,
    dimensions: Dimensions,
    status: GameStatus,
    current_token: Token,
    moves: Vector<Move>,
}

impl GameState {
    /// Create a new game.
    ///
    /// Requires at least two uniquely named players and a non-empty board.
    /// The first player moves first.
    pub fn new<S: Into<String>>(
        players: impl IntoIterator<Item = S>,
        dimensions: Dimensions,
    ) -> Result<Self, GameError> {
        let names: Vec<String> = players.into_iter().map(Into::into).collect();

        if names.len() < 2 {
            return Err(GameError::Validation(format!(
                "a game needs at least 2 players, got {}",
                names.len()
            )));
        }
        if names.len() > Roster::MAX_PLAYERS {
            return Err(GameError::Validation(format!(
                "at most {} players supported",
                Roster::MAX_PLAYERS
            )));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(GameError::Validation(format!("duplicate player name {name}")));
            }
        }
        if dimensions.columns == 0 || dimensions.rows == 0 {
            return Err(GameError::Validation(format!(
                "board must have at least one column and one row, got {dimensions}"
            )));
        }

        Ok(Self {
            roster: Roster::from_names(names),
            dimensions,
            status: GameStatus::InProgress,
            current_token: Token::FIRST,
            moves: Vector::new(),
        })
    }

    /// Participants in creation order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Board dimensions.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Token whose turn is next. Meaningless once the game is done.
    #[must_use]
    pub fn current_token(&self) -> Token {
        self.current_token
    }

    /// The move log.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    /// Number of logged moves, drops and quits alike.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Number of logged drops.
    #[must_use]
    pub fn drop_count(&self) -> usize {
        self.moves.iter().filter(|m| !m.is_quit()).count()
    }

    /// Turn number the next logged move will get.
    #[must_use]
    pub fn next_turn(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// The winning player, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Done(GameResult::Winner(token)) => self.roster.by_token(token),
            _ => None,
        }
    }

    // === Mutation (lifecycle only) ===

    pub(crate) fn record_move(&mut self, m: Move) {
        self.moves.push_back(m);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn set_current_token(&mut self, token: Token) {
        self.current_token = token;
    }

    pub(crate) fn mark_quit(&mut self, token: Token) -> bool {
        self.roster.mark_quit(token)
    }
}
