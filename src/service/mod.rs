//! Thin service layer over the engine.
//!
//! No transport lives here. A web front end decodes bodies into the
//! `request` types, calls `GameService`, serializes the `view` types and maps
//! `GameError::kind()` to a status code.

pub mod request;
pub mod view;
pub mod store;
pub mod game_service;

pub use request::{CreateGameRequest, MoveRequest, NewGame};
pub use view::{CreatedGame, GameList, GameView, MoveLink, MoveList, MoveView, StateLabel};
pub use store::{GameStore, MemoryStore, StoreError, Versioned};
pub use game_service::GameService;
