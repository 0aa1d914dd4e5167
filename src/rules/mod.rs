//! Game rules: turn rotation and the lifecycle state machine.
//!
//! - `turn`: who moves next
//! - `lifecycle`: validate a command against a snapshot, apply the outcome

pub mod turn;
pub mod lifecycle;

pub use turn::next_token;
pub use lifecycle::{apply, submit, validate, MoveOutcome};
