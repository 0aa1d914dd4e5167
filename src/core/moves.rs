//! Move records and commands.
//!
//! A `Command` is what a player asks for; a `Move` is what ends up in the log
//! once the lifecycle accepted the command. Only moves are durable.

use serde::{Deserialize, Serialize};

/// What a logged move did.
///
/// The column only exists on drops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Token dropped into a 1-indexed column.
    Drop { column: u32 },
    /// Player forfeited.
    Quit,
}

/// A logged move.
///
/// Turn numbers start at 1 and are contiguous across the whole log.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Turn number (1-based).
    pub turn: u32,

    /// Name of the player who made the move.
    pub player: String,

    /// Drop or quit.
    pub kind: MoveKind,
}

impl Move {
    /// Create a drop move.
    #[must_use]
    pub fn drop(turn: u32, player: impl Into<String>, column: u32) -> Self {
        Self {
            turn,
            player: player.into(),
            kind: MoveKind::Drop { column },
        }
    }

    /// Create a quit move.
    #[must_use]
    pub fn quit(turn: u32, player: impl Into<String>) -> Self {
        Self {
            turn,
            player: player.into(),
            kind: MoveKind::Quit,
        }
    }

    /// Column of a drop, `None` for quits.
    #[must_use]
    pub fn column(&self) -> Option<u32> {
        match self.kind {
            MoveKind::Drop { column } => Some(column),
            MoveKind::Quit => None,
        }
    }

    /// Check if this move is a quit.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self.kind, MoveKind::Quit)
    }
}

/// A move requested by a player, not yet validated.
///
/// Columns are kept as raw request integers; out-of-range values are
/// rejected by validation, not by parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Drop { player: String, column: i64 },
    Quit { player: String },
}

impl Command {
    /// Drop command.
    #[must_use]
    pub fn drop(player: impl Into<String>, column: i64) -> Self {
        Command::Drop {
            player: player.into(),
            column,
        }
    }

    /// Quit command.
    #[must_use]
    pub fn quit(player: impl Into<String>) -> Self {
        Command::Quit {
            player: player.into(),
        }
    }

    /// Name of the acting player.
    #[must_use]
    pub fn player(&self) -> &str {
        match self {
            Command::Drop { player, .. } | Command::Quit { player } => player,
        }
    }
}
