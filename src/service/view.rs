//! Response bodies, shaped for the wire.

use serde::{Deserialize, Serialize};

use crate::core::{GameId, GameState, Move, MoveKind};

/// Response to a game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedGame {
    #[serde(rename = "gameId")]
    pub game_id: GameId,
}

/// All known games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameList {
    pub games: Vec<GameId>,
}

/// Wire label for the game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateLabel {
    InProgress,
    Done,
}

/// Public view of a game.
///
/// `winner` is omitted while the game is in progress and serialized as
/// `null` for a finished game without a winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub players: Vec<String>,
    pub state: StateLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Option<String>>,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        let (label, winner) = if state.is_done() {
            (StateLabel::Done, Some(state.winner().map(|p| p.name.clone())))
        } else {
            (StateLabel::InProgress, None)
        };
        Self {
            players: state.roster().names(),
            state: label,
            winner,
        }
    }
}

/// One entry of a move listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveView {
    #[serde(rename = "MOVE")]
    Move { player: String, column: u32 },
    #[serde(rename = "QUIT")]
    Quit { player: String },
}

impl From<&Move> for MoveView {
    fn from(m: &Move) -> Self {
        match m.kind {
            MoveKind::Drop { column } => MoveView::Move {
                player: m.player.clone(),
                column,
            },
            MoveKind::Quit => MoveView::Quit {
                player: m.player.clone(),
            },
        }
    }
}

/// A move listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    pub moves: Vec<MoveView>,
}

/// Response to an accepted drop: `<gameId>/moves/<turn>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLink {
    #[serde(rename = "move")]
    pub link: String,
}

impl MoveLink {
    /// Link for `turn` in `game`.
    #[must_use]
    pub fn new(game: &GameId, turn: u32) -> Self {
        Self {
            link: format!("{game}/moves/{turn}"),
        }
    }
}
