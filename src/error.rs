//! Error types surfaced to the request boundary.
//!
//! Every failure is a `GameError`. The boundary only needs `kind()` and
//! `Display`: the kind picks the response code, the message goes in the body.

use crate::board::ReplayError;
use crate::core::GameId;
use crate::service::StoreError;

/// Success code for reads, creates and accepted drops.
pub const STATUS_OK: u16 = 200;

/// Success code for an accepted quit.
pub const STATUS_QUIT_ACCEPTED: u16 = 202;

/// Classification of a `GameError`, used to pick a response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unparseable input.
    Validation,
    /// Missing game, non-participant player or empty move range.
    NotFound,
    /// Out of turn, or lost a concurrent write.
    Conflict,
    /// Game already finished (or the player already quit).
    Gone,
    /// Target column cannot take a token.
    IllegalMove,
    /// Stored data is inconsistent or could not be encoded.
    Internal,
}

impl ErrorKind {
    /// Response code the boundary should use for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::IllegalMove => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Gone => 410,
            ErrorKind::Internal => 500,
        }
    }
}

/// Errors produced by the engine and the service layer.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("malformed request: {0}")]
    Validation(String),

    #[error("game {0} not found")]
    GameNotFound(GameId),

    #[error("player {0} does not belong to this game")]
    PlayerNotFound(String),

    #[error("the game is already DONE")]
    AlreadyDone,

    #[error("player {0} has already quit")]
    AlreadyQuit(String),

    #[error("player {0} tried to post when it's not their turn")]
    NotYourTurn(String),

    #[error("illegal move: unable to drop token in column {0}")]
    IllegalMove(i64),

    #[error("no moves found for game {game}, starting at move {start}")]
    NoMovesFound { game: GameId, start: i64 },

    #[error("move {turn} not found in game {game}")]
    MoveNotFound { game: GameId, turn: u32 },

    #[error("game {0} was modified by another request")]
    Stale(GameId),

    #[error("move log cannot be replayed: {0}")]
    CorruptLog(#[from] ReplayError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl GameError {
    /// Classify this error for the boundary.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Validation(_) => ErrorKind::Validation,
            GameError::GameNotFound(_)
            | GameError::PlayerNotFound(_)
            | GameError::NoMovesFound { .. }
            | GameError::MoveNotFound { .. } => ErrorKind::NotFound,
            GameError::AlreadyDone | GameError::AlreadyQuit(_) => ErrorKind::Gone,
            GameError::NotYourTurn(_) | GameError::Stale(_) => ErrorKind::Conflict,
            GameError::IllegalMove(_) => ErrorKind::IllegalMove,
            GameError::CorruptLog(_) => ErrorKind::Internal,
            GameError::Store(StoreError::VersionMismatch { .. }) => ErrorKind::Conflict,
            GameError::Store(_) => ErrorKind::Internal,
        }
    }

    /// Response code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
