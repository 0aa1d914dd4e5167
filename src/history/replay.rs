//! Board reconstruction from the move log.

use rustc_hash::FxHashMap;

use crate::board::{Board, ReplayError};
use crate::core::{GameState, MoveKind, Token};

/// Rebuild the board by replaying every drop in log order.
///
/// Quits are skipped: they never occupy a cell.
pub fn replay(state: &GameState) -> Result<Board, ReplayError> {
    let tokens: FxHashMap<&str, Token> = state
        .roster()
        .iter()
        .map(|p| (p.name.as_str(), p.token))
        .collect();

    let mut drops = Vec::with_capacity(state.move_count());
    for m in state.moves().iter() {
        let MoveKind::Drop { column } = m.kind else {
            continue;
        };
        let token = tokens
            .get(m.player.as_str())
            .copied()
            .ok_or_else(|| ReplayError::UnknownPlayer {
                turn: m.turn,
                player: m.player.clone(),
            })?;
        drops.push((i64::from(column), token));
    }

    let mut board = Board::new(state.dimensions());
    board.apply_drops(drops)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dimensions;
    use crate::core::Move;

    fn game() -> GameState {
        GameState::new(["alice", "bob"], Dimensions::new(4, 2)).unwrap()
    }

    #[test]
    fn test_empty_log_gives_empty_board() {
        let board = replay(&game()).unwrap();
        assert_eq!(board, Board::new(Dimensions::new(4, 2)));
    }

    #[test]
    fn test_replay_maps_players_to_tokens() {
        let mut state = game();
        state.record_move(Move::drop(1, "alice", 4));
        state.record_move(Move::drop(2, "bob", 1));
        state.record_move(Move::drop(3, "alice", 1));
        state.record_move(Move::drop(4, "bob", 3));

        let board = replay(&state).unwrap();
        assert_eq!(board.get(1, 1), Some(Token(2)));
        assert_eq!(board.get(1, 2), Some(Token(1)));
        assert_eq!(board.get(2, 1), None);
        assert_eq!(board.get(3, 1), Some(Token(2)));
        assert_eq!(board.get(4, 1), Some(Token(1)));
    }

    #[test]
    fn test_quits_are_skipped() {
        let mut state = game();
        state.record_move(Move::drop(1, "alice", 2));
        state.record_move(Move::quit(2, "bob"));

        let board = replay(&state).unwrap();
        assert_eq!(board.height(2), 1);
        assert_eq!(board.height(1), 0);
    }

    #[test]
    fn test_unknown_player_is_reported() {
        let mut state = game();
        state.record_move(Move::drop(1, "mallory", 1));

        assert_eq!(
            replay(&state),
            Err(ReplayError::UnknownPlayer {
                turn: 1,
                player: "mallory".to_string()
            })
        );
    }

    #[test]
    fn test_overfull_log_is_reported() {
        let mut state = game();
        for turn in 1..=3 {
            state.record_move(Move::drop(turn, "alice", 1));
        }
        assert_eq!(
            replay(&state),
            Err(ReplayError::IllegalDrop { index: 2, column: 1 })
        );
    }
}
