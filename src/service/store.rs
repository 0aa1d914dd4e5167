//! Storage interface and an in-memory reference store.
//!
//! The engine never talks to storage. The service loads a versioned record,
//! runs the pure lifecycle on it and commits with the version it loaded; a
//! store must refuse a commit whose version is stale. That is the only
//! concurrency control in the system.
//!
//! `MemoryStore` keeps records bincode-encoded, so every load decodes the
//! durable form exactly as a real backend would.

use rustc_hash::FxHashMap;

use crate::core::{GameId, GameState};

/// Errors raised by a `GameStore`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("game {game} is at version {found}, expected {expected}")]
    VersionMismatch { game: GameId, expected: u64, found: u64 },

    #[error("game {0} already exists")]
    Duplicate(GameId),

    #[error("game {0} does not exist")]
    Missing(GameId),

    #[error("failed to encode or decode game record: {0}")]
    Codec(#[from] bincode::Error),
}

/// A value tagged with the store version it was read at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

/// Persistence collaborator.
///
/// Versions start at 1 on insert and increase by one on each commit.
pub trait GameStore {
    /// Store a new game.
    fn insert(&mut self, id: GameId, state: &GameState) -> Result<(), StoreError>;

    /// Read a game and its current version.
    fn load(&self, id: &GameId) -> Result<Option<Versioned<GameState>>, StoreError>;

    /// Replace a game if it is still at `expected`. Returns the new version.
    fn commit(&mut self, id: &GameId, expected: u64, state: &GameState) -> Result<u64, StoreError>;

    /// All stored game ids, sorted.
    fn ids(&self) -> Vec<GameId>;
}

struct Record {
    version: u64,
    bytes: Vec<u8>,
}

/// In-memory `GameStore`.
#[derive(Default)]
pub struct MemoryStore {
    records: FxHashMap<GameId, Record>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn insert(&mut self, id: GameId, state: &GameState) -> Result<(), StoreError> {
        if self.records.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        let bytes = bincode::serialize(state)?;
        self.records.insert(id, Record { version: 1, bytes });
        Ok(())
    }

    fn load(&self, id: &GameId) -> Result<Option<Versioned<GameState>>, StoreError> {
        match self.records.get(id) {
            Some(record) => Ok(Some(Versioned {
                version: record.version,
                value: bincode::deserialize(&record.bytes)?,
            })),
            None => Ok(None),
        }
    }

    fn commit(&mut self, id: &GameId, expected: u64, state: &GameState) -> Result<u64, StoreError> {
        let bytes = bincode::serialize(state)?;
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::Missing(id.clone()))?;

        if record.version != expected {
            return Err(StoreError::VersionMismatch {
                game: id.clone(),
                expected,
                found: record.version,
            });
        }

        record.version += 1;
        record.bytes = bytes;
        Ok(record.version)
    }

    fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.records.keys().cloned().collect();
        ids.sort();
        ids
    }
}
