//! The game lifecycle: validate a command, then apply the outcome.
//!
//! Validation is pure. It reads a snapshot, rebuilds the board from the move
//! log, runs the checks in a fixed order and describes the resulting change
//! as a `MoveOutcome`. Applying an outcome never fails, so a rejected command
//! cannot leave a half-applied state behind.
//!
//! Drop checks, in order (the first failure wins):
//! 1. the player is a participant (`PlayerNotFound`)
//! 2. the game is still in progress (`AlreadyDone`)
//! 3. it is the player's turn (`NotYourTurn`)
//! 4. the column can take a token (`IllegalMove`)
//!
//! Whether the game exists at all is the caller's concern.

use tracing::trace;

use crate::core::{Command, GameResult, GameState, GameStatus, Move, Player, Token};
use crate::error::GameError;
use crate::history;

/// A validated change, ready to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Drop {
        player: String,
        token: Token,
        column: u32,
        row: u32,
        turn: u32,
        status: GameStatus,
        next: Token,
    },
    Quit {
        player: String,
        token: Token,
        turn: u32,
        status: GameStatus,
        next: Token,
    },
}

impl MoveOutcome {
    /// Turn number the move will be logged under.
    #[must_use]
    pub fn turn(&self) -> u32 {
        match self {
            MoveOutcome::Drop { turn, .. } | MoveOutcome::Quit { turn, .. } => *turn,
        }
    }

    /// Status after the move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self {
            MoveOutcome::Drop { status, .. } | MoveOutcome::Quit { status, .. } => *status,
        }
    }

    /// Token that moves next.
    #[must_use]
    pub fn next(&self) -> Token {
        match self {
            MoveOutcome::Drop { next, .. } | MoveOutcome::Quit { next, .. } => *next,
        }
    }
}

/// Validate `command` against `snapshot`.
pub fn validate(snapshot: &GameState, command: &Command) -> Result<MoveOutcome, GameError> {
    match command {
        Command::Drop { player, column } => validate_drop(snapshot, player, *column),
        Command::Quit { player } => validate_quit(snapshot, player),
    }
}

fn participant<'a>(snapshot: &'a GameState, name: &str) -> Result<&'a Player, GameError> {
    snapshot
        .roster()
        .find(name)
        .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
}

fn validate_drop(snapshot: &GameState, name: &str, column: i64) -> Result<MoveOutcome, GameError> {
    let player = participant(snapshot, name)?;

    if snapshot.is_done() {
        return Err(GameError::AlreadyDone);
    }
    if snapshot.current_token() != player.token {
        return Err(GameError::NotYourTurn(name.to_string()));
    }

    let mut board = history::replay(snapshot)?;
    if !board.can_drop(column) {
        return Err(GameError::IllegalMove(column));
    }
    let row = board
        .drop_token(column, player.token)
        .map_err(|e| GameError::IllegalMove(e.column))?;
    let logged_column = u32::try_from(column).map_err(|_| GameError::IllegalMove(column))?;

    let status = if board.check_win(column, i64::from(row)) {
        GameStatus::Done(GameResult::Winner(player.token))
    } else if board.is_full() {
        GameStatus::Done(GameResult::Draw)
    } else {
        GameStatus::InProgress
    };

    Ok(MoveOutcome::Drop {
        player: player.name.clone(),
        token: player.token,
        column: logged_column,
        row,
        turn: snapshot.next_turn(),
        status,
        next: snapshot.roster().next_after(player.token).unwrap_or(player.token),
    })
}

fn validate_quit(snapshot: &GameState, name: &str) -> Result<MoveOutcome, GameError> {
    let player = participant(snapshot, name)?;

    if snapshot.is_done() {
        return Err(GameError::AlreadyDone);
    }
    if player.has_quit {
        return Err(GameError::AlreadyQuit(name.to_string()));
    }

    let remaining: Vec<Token> = snapshot
        .roster()
        .active()
        .map(|p| p.token)
        .filter(|&t| t != player.token)
        .collect();

    let status = match remaining.as_slice() {
        [last] => GameStatus::Done(GameResult::Winner(*last)),
        [] => GameStatus::Done(GameResult::Draw),
        _ => GameStatus::InProgress,
    };

    // Quitting out of turn keeps the current turn where it is.
    let next = if snapshot.current_token() == player.token {
        snapshot.roster().next_after(player.token).unwrap_or(player.token)
    } else {
        snapshot.current_token()
    };

    Ok(MoveOutcome::Quit {
        player: player.name.clone(),
        token: player.token,
        turn: snapshot.next_turn(),
        status,
        next,
    })
}

/// Apply a validated outcome.
///
/// The outcome must come from `validate` on this same state.
#[must_use]
pub fn apply(mut state: GameState, outcome: MoveOutcome) -> GameState {
    trace!(turn = outcome.turn(), status = outcome.status().label(), "applying move");

    match outcome {
        MoveOutcome::Drop {
            player,
            column,
            turn,
            status,
            next,
            ..
        } => {
            state.record_move(Move::drop(turn, player, column));
            state.set_status(status);
            state.set_current_token(next);
        }
        MoveOutcome::Quit {
            player,
            token,
            turn,
            status,
            next,
        } => {
            state.mark_quit(token);
            state.record_move(Move::quit(turn, player));
            state.set_status(status);
            state.set_current_token(next);
        }
    }
    state
}

/// Validate and apply in one step, leaving `snapshot` untouched.
pub fn submit(snapshot: &GameState, command: &Command) -> Result<(GameState, MoveOutcome), GameError> {
    let outcome = validate(snapshot, command)?;
    let next = apply(snapshot.clone(), outcome.clone());
    Ok((next, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dimensions;

    fn new_game() -> GameState {
        GameState::new(["A", "B"], Dimensions::new(4, 4)).unwrap()
    }

    fn play(state: GameState, commands: &[Command]) -> GameState {
        commands.iter().fold(state, |s, c| submit(&s, c).unwrap().0)
    }

    #[test]
    fn test_first_drop() {
        let state = new_game();
        let (next, outcome) = submit(&state, &Command::drop("A", 1)).unwrap();

        assert_eq!(outcome.turn(), 1);
        assert!(matches!(outcome, MoveOutcome::Drop { row: 1, column: 1, .. }));
        assert_eq!(next.current_token(), Token(2));
        assert_eq!(next.moves()[0], Move::drop(1, "A", 1));
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_vertical_win() {
        let state = play(
            new_game(),
            &[
                Command::drop("A", 1),
                Command::drop("B", 2),
                Command::drop("A", 1),
                Command::drop("B", 2),
                Command::drop("A", 1),
                Command::drop("B", 2),
                Command::drop("A", 1),
            ],
        );

        assert_eq!(state.status(), GameStatus::Done(GameResult::Winner(Token(1))));
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("A"));
        assert_eq!(state.move_count(), 7);
    }

    #[test]
    fn test_check_order_player_before_status() {
        let state = play(new_game(), &[Command::quit("B")]);
        let err = validate(&state, &Command::drop("Z", 1)).unwrap_err();
        assert!(matches!(err, GameError::PlayerNotFound(_)));
    }

    #[test]
    fn test_check_order_status_before_turn() {
        let state = play(new_game(), &[Command::quit("B")]);
        // B is not on turn either, but Gone wins.
        let err = validate(&state, &Command::drop("B", 1)).unwrap_err();
        assert!(matches!(err, GameError::AlreadyDone));
    }

    #[test]
    fn test_check_order_turn_before_column() {
        let err = validate(&new_game(), &Command::drop("B", 99)).unwrap_err();
        assert!(matches!(err, GameError::NotYourTurn(_)));
    }

    #[test]
    fn test_illegal_column() {
        let state = new_game();
        for column in [0, 5, -3] {
            let err = validate(&state, &Command::drop("A", column)).unwrap_err();
            assert!(matches!(err, GameError::IllegalMove(c) if c == column));
        }
    }

    #[test]
    fn test_full_column_is_illegal() {
        let state = play(
            new_game(),
            &[
                Command::drop("A", 1),
                Command::drop("B", 1),
                Command::drop("A", 1),
                Command::drop("B", 1),
            ],
        );
        let err = validate(&state, &Command::drop("A", 1)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove(1)));
    }

    #[test]
    fn test_quit_two_players() {
        let state = play(new_game(), &[Command::drop("A", 1), Command::drop("B", 2)]);
        let (state, outcome) = submit(&state, &Command::quit("B")).unwrap();

        assert_eq!(outcome.turn(), 3);
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("A"));
        assert!(state.moves()[2].is_quit());
    }

    #[test]
    fn test_quit_out_of_turn_is_allowed() {
        let (state, _) = submit(&new_game(), &Command::quit("B")).unwrap();
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("A"));
    }

    #[test]
    fn test_quit_after_done() {
        let state = play(new_game(), &[Command::quit("A")]);
        let err = validate(&state, &Command::quit("B")).unwrap_err();
        assert!(matches!(err, GameError::AlreadyDone));
    }

    #[test]
    fn test_three_player_quit_eliminates() {
        let state = GameState::new(["A", "B", "C"], Dimensions::new(5, 5)).unwrap();
        let state = play(state, &[Command::drop("A", 1), Command::quit("B")]);

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_token(), Token(3));

        let err = validate(&state, &Command::quit("B")).unwrap_err();
        assert!(matches!(err, GameError::AlreadyQuit(_)));

        let state = play(state, &[Command::drop("C", 2), Command::drop("A", 3)]);
        assert_eq!(state.current_token(), Token(3));

        let state = play(state, &[Command::quit("A")]);
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("C"));
    }

    #[test]
    fn test_quitter_tokens_stay_on_board() {
        let state = GameState::new(["A", "B", "C"], Dimensions::new(5, 5)).unwrap();
        let state = play(
            state,
            &[Command::drop("A", 1), Command::drop("B", 1), Command::quit("B")],
        );
        let board = history::replay(&state).unwrap();
        assert_eq!(board.get(1, 2), Some(Token(2)));
        assert_eq!(state.current_token(), Token(3));
    }

    #[test]
    fn test_draw_on_full_board() {
        // 4x4 filled in pairs of columns: no run of four anywhere.
        let order = [1, 2, 1, 2, 2, 1, 2, 1, 3, 4, 3, 4, 4, 3, 4, 3];
        let mut state = new_game();
        for (i, column) in order.iter().enumerate() {
            let player = if i % 2 == 0 { "A" } else { "B" };
            state = submit(&state, &Command::drop(player, *column)).unwrap().0;
        }

        assert_eq!(state.status(), GameStatus::Done(GameResult::Draw));
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_rejected_command_leaves_state_untouched() {
        let state = play(new_game(), &[Command::drop("A", 1)]);
        let before = state.clone();
        assert!(submit(&state, &Command::drop("A", 2)).is_err());
        assert_eq!(state, before);
    }
}
