//! The move log as the durable record of a game.
//!
//! The board is never stored. Every validation starts by replaying the log
//! into a fresh board; listings read the log directly.

pub mod replay;
pub mod listing;

pub use replay::replay;
pub use listing::{select, MoveRange};
