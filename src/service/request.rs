//! Decoded request bodies and their validation.
//!
//! Request types deserialize from the wire shapes directly. Numbers stay as
//! `i64` until validation, so an out-of-range value becomes a validation
//! error instead of a decode failure.

use serde::{Deserialize, Serialize};

use crate::board::Dimensions;
use crate::core::CreateGameSchema;
use crate::error::GameError;

/// Body of a game-creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub players: Vec<String>,
    pub columns: i64,
    pub rows: i64,
}

impl CreateGameRequest {
    /// Build a request.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>, columns: i64, rows: i64) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            columns,
            rows,
        }
    }
}

/// Body of a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub column: i64,
}

/// A creation request that passed its schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewGame {
    pub players: Vec<String>,
    pub dimensions: Dimensions,
}

impl CreateGameSchema {
    /// Check a creation request against this schema.
    pub fn validate(&self, request: &CreateGameRequest) -> Result<NewGame, GameError> {
        let count = request.players.len();
        if count < self.min_players || count > self.max_players {
            return Err(GameError::Validation(format!(
                "expected {}..={} players, got {count}",
                self.min_players, self.max_players
            )));
        }

        for (i, name) in request.players.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::Validation("player names must not be empty".into()));
            }
            if name.chars().count() > self.max_name_len {
                return Err(GameError::Validation(format!(
                    "player name {name} is longer than {} characters",
                    self.max_name_len
                )));
            }
            if request.players[..i].contains(name) {
                return Err(GameError::Validation(format!("duplicate player name {name}")));
            }
        }

        let columns = bounded("columns", request.columns, self.min_columns, self.max_columns)?;
        let rows = bounded("rows", request.rows, self.min_rows, self.max_rows)?;

        Ok(NewGame {
            players: request.players.clone(),
            dimensions: Dimensions::new(columns, rows),
        })
    }
}

fn bounded(field: &str, value: i64, min: u32, max: u32) -> Result<u32, GameError> {
    match u32::try_from(value) {
        Ok(v) if (min..=max).contains(&v) => Ok(v),
        _ => Err(GameError::Validation(format!(
            "{field} must be in {min}..={max}, got {value}"
        ))),
    }
}
