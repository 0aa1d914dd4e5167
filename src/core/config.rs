//! Configuration types.
//!
//! Request schemas are plain immutable values: build one at startup, hand it
//! to the service, never mutate it afterwards.
//!
//! - `CreateGameSchema`: limits applied to game-creation requests
//! - `ServiceConfig`: everything the service needs at startup

use serde::{Deserialize, Serialize};

/// Limits applied to a game-creation request.
///
/// The engine core accepts any board of at least 1x1 and any roster of at
/// least two players; the stricter limits live here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameSchema {
    /// Fewest players a game may have.
    pub min_players: usize,

    /// Most players a game may have.
    pub max_players: usize,

    /// Smallest allowed column count.
    pub min_columns: u32,

    /// Largest allowed column count.
    pub max_columns: u32,

    /// Smallest allowed row count.
    pub min_rows: u32,

    /// Largest allowed row count.
    pub max_rows: u32,

    /// Longest allowed player name, in characters.
    pub max_name_len: usize,
}

impl Default for CreateGameSchema {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 2,
            min_columns: 4,
            max_columns: 64,
            min_rows: 4,
            max_rows: 64,
            max_name_len: 50,
        }
    }
}

impl CreateGameSchema {
    /// Set the allowed player count range.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the allowed column range.
    #[must_use]
    pub fn with_columns(mut self, min: u32, max: u32) -> Self {
        self.min_columns = min;
        self.max_columns = max;
        self
    }

    /// Set the allowed row range.
    #[must_use]
    pub fn with_rows(mut self, min: u32, max: u32) -> Self {
        self.min_rows = min;
        self.max_rows = max;
        self
    }

    /// Set the maximum player name length.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }
}

/// Startup configuration for `GameService`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Schema for creation requests.
    pub create: CreateGameSchema,

    /// Seed for game-id generation. `None` seeds from the OS.
    pub id_seed: Option<u64>,
}

impl ServiceConfig {
    /// Set the creation schema.
    #[must_use]
    pub fn with_create_schema(mut self, schema: CreateGameSchema) -> Self {
        self.create = schema;
        self
    }

    /// Use a fixed seed for game ids.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }
}
