//! # drop-token
//!
//! A turn-based drop-token (Connect-Four-style) game engine.
//!
//! ## Design Principles
//!
//! 1. **The move log is the truth**: no board is stored. Every validation
//!    replays the log into a fresh `Board`.
//!
//! 2. **Validate, then apply**: `rules::validate` is pure and returns a
//!    `MoveOutcome`; `rules::apply` cannot fail. A rejected command never
//!    leaves a partial change behind.
//!
//! 3. **Storage-agnostic**: the engine has no I/O. The service layer talks
//!    to a `GameStore` and relies on its version check for concurrency.
//!
//! ## Modules
//!
//! - `core`: tokens, roster, moves, game state, ids, configuration
//! - `board`: grid storage, drops, win detection
//! - `rules`: turn rotation and the lifecycle state machine
//! - `history`: replay and move listing
//! - `service`: request schemas, views, storage trait, request flows
//! - `error`: `GameError` and the status-code mapping

pub mod core;
pub mod board;
pub mod rules;
pub mod history;
pub mod service;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Command, CreateGameSchema, GameId, GameResult, GameState, GameStatus, IdGenerator,
    Move, MoveKind, Player, Roster, ServiceConfig, Token,
};

pub use crate::board::{Board, Dimensions, IllegalDrop, ReplayError, WINNING_RUN};

pub use crate::rules::{MoveOutcome, next_token};

pub use crate::history::{replay, MoveRange};

pub use crate::service::{
    CreateGameRequest, CreatedGame, GameList, GameService, GameStore, GameView,
    MemoryStore, MoveLink, MoveList, MoveRequest, MoveView, StateLabel, StoreError,
};

pub use crate::error::{ErrorKind, GameError, STATUS_OK, STATUS_QUIT_ACCEPTED};
