//! Game identifiers and their generator.
//!
//! Ids are 24 lowercase hex characters (96 random bits). The generator wraps
//! ChaCha8 so a fixed seed gives a reproducible id sequence in tests.
//!
//! ```
//! use drop_token::core::IdGenerator;
//!
//! let mut a = IdGenerator::new(7);
//! let mut b = IdGenerator::new(7);
//! assert_eq!(a.next_id(), b.next_id());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of random bytes in a generated id.
const ID_BYTES: usize = 12;

/// Opaque game identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Deterministic game-id generator.
#[derive(Clone, Debug)]
pub struct IdGenerator {
    inner: ChaCha8Rng,
}

impl IdGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> GameId {
        let bytes: [u8; ID_BYTES] = self.inner.gen();
        let id = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
        GameId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let mut ids = IdGenerator::new(42);
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), ID_BYTES * 2);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_determinism() {
        let mut a = IdGenerator::new(42);
        let mut b = IdGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }

    #[test]
    fn test_sequence_is_unique() {
        let mut ids = IdGenerator::new(1);
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_game_id_serializes_as_string() {
        let id = GameId::from("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        assert_eq!(format!("{id}"), "abc123");
    }
}
