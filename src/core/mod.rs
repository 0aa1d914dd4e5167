//! Core types: tokens, roster, moves, game state, ids, configuration.
//!
//! Nothing in here knows about boards or rules; those live in `board` and
//! `rules` and operate on these types.

pub mod token;
pub mod moves;
pub mod id;
pub mod config;
pub mod state;

pub use token::{Player, Roster, Token};
pub use moves::{Command, Move, MoveKind};
pub use id::{GameId, IdGenerator};
pub use config::{CreateGameSchema, ServiceConfig};
pub use state::{GameResult, GameState, GameStatus};
