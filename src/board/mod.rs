//! The game grid.
//!
//! `Board` knows about cells, columns and runs. It has no idea who the
//! players are, whose turn it is, or whether anybody quit.

pub mod grid;
pub mod win;

pub use grid::{Board, Dimensions, IllegalDrop, ReplayError};
pub use win::WINNING_RUN;
