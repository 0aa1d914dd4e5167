//! Request flows: create, read, move, quit, list.
//!
//! Every write follows the same path: load the versioned record, validate
//! the command against it, apply the outcome, commit with the loaded
//! version. Nothing is retried; a lost race surfaces as `GameError::Stale`.

use tracing::{debug, info, instrument, warn};

use super::request::{CreateGameRequest, MoveRequest};
use super::store::{GameStore, MemoryStore, StoreError, Versioned};
use super::view::{CreatedGame, GameList, GameView, MoveLink, MoveList, MoveView};
use crate::core::{Command, CreateGameSchema, GameId, GameState, IdGenerator, ServiceConfig};
use crate::error::GameError;
use crate::history::{self, MoveRange};
use crate::rules::{self, MoveOutcome};

/// Transport-agnostic drop-token service.
pub struct GameService<S = MemoryStore> {
    store: S,
    ids: IdGenerator,
    schema: CreateGameSchema,
}

impl GameService<MemoryStore> {
    /// Service backed by an in-memory store.
    #[must_use]
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(MemoryStore::new(), config)
    }
}

impl<S: GameStore> GameService<S> {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: S, config: ServiceConfig) -> Self {
        let ids = match config.id_seed {
            Some(seed) => IdGenerator::new(seed),
            None => IdGenerator::from_entropy(),
        };
        Self {
            store,
            ids,
            schema: config.create,
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Validate a creation request and store the new game.
    #[instrument(skip(self, request), fields(players = request.players.len()))]
    pub fn create_game(&mut self, request: &CreateGameRequest) -> Result<CreatedGame, GameError> {
        let new_game = self.schema.validate(request).map_err(|e| {
            debug!(error = %e, "rejected game creation");
            e
        })?;
        let state = GameState::new(new_game.players, new_game.dimensions)?;

        let game_id = self.ids.next_id();
        self.store.insert(game_id.clone(), &state)?;

        info!(game = %game_id, dimensions = %state.dimensions(), "game created");
        Ok(CreatedGame { game_id })
    }

    /// Ids of every stored game.
    #[must_use]
    pub fn list_games(&self) -> GameList {
        GameList {
            games: self.store.ids(),
        }
    }

    /// Public view of a game.
    pub fn get_game(&self, game: &GameId) -> Result<GameView, GameError> {
        let record = self.load(game)?;
        Ok(GameView::from(&record.value))
    }

    /// Drop a token for `player`.
    #[instrument(skip(self, game, request), fields(game = %game, column = request.column))]
    pub fn submit_move(
        &mut self,
        game: &GameId,
        player: &str,
        request: &MoveRequest,
    ) -> Result<MoveLink, GameError> {
        let outcome = self.execute(game, Command::drop(player, request.column))?;
        Ok(MoveLink::new(game, outcome.turn()))
    }

    /// Forfeit for `player`.
    #[instrument(skip(self, game), fields(game = %game))]
    pub fn quit(&mut self, game: &GameId, player: &str) -> Result<(), GameError> {
        self.execute(game, Command::quit(player))?;
        Ok(())
    }

    /// Moves of a game within `range`.
    pub fn list_moves(&self, game: &GameId, range: MoveRange) -> Result<MoveList, GameError> {
        let record = self.load(game)?;
        let moves = history::select(record.value.moves(), range).ok_or_else(|| GameError::NoMovesFound {
            game: game.clone(),
            start: range.start.unwrap_or(0),
        })?;
        Ok(MoveList {
            moves: moves.iter().map(MoveView::from).collect(),
        })
    }

    /// A single move by its 1-based turn number.
    pub fn get_move(&self, game: &GameId, turn: u32) -> Result<MoveView, GameError> {
        let record = self.load(game)?;
        record
            .value
            .moves()
            .iter()
            .find(|m| m.turn == turn)
            .map(MoveView::from)
            .ok_or_else(|| GameError::MoveNotFound {
                game: game.clone(),
                turn,
            })
    }

    fn load(&self, game: &GameId) -> Result<Versioned<GameState>, GameError> {
        self.store
            .load(game)?
            .ok_or_else(|| GameError::GameNotFound(game.clone()))
    }

    fn execute(&mut self, game: &GameId, command: Command) -> Result<MoveOutcome, GameError> {
        let record = self.load(game)?;

        let outcome = rules::validate(&record.value, &command).map_err(|e| {
            debug!(player = command.player(), error = %e, "rejected command");
            e
        })?;
        let next = rules::apply(record.value, outcome.clone());

        match self.store.commit(game, record.version, &next) {
            Ok(_) => {}
            Err(StoreError::VersionMismatch { expected, found, .. }) => {
                warn!(expected, found, "lost a concurrent update");
                return Err(GameError::Stale(game.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            player = command.player(),
            turn = outcome.turn(),
            status = outcome.status().label(),
            "move accepted"
        );
        if let Some(winner) = next.winner() {
            info!(winner = %winner.name, "game won");
        } else if next.is_done() {
            info!("game drawn");
        }
        Ok(outcome)
    }
}
