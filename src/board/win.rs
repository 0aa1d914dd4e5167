//! Win detection.
//!
//! Only the just-placed token can complete a run, so the scan starts there
//! and walks each of the four axes outwards. Each direction stops after
//! `WINNING_RUN - 1` matching cells; the cost is independent of board size.

use super::grid::Board;
use crate::core::Token;

/// Run length that ends the game.
pub const WINNING_RUN: u32 = 4;

/// One step along each axis: vertical, horizontal, and the two diagonals.
/// The opposite direction is the negated step.
const AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Board {
    /// Does the token at `(column, row)` sit on a run of `WINNING_RUN`?
    ///
    /// Empty or out-of-range cells never win.
    #[must_use]
    pub fn check_win(&self, column: i64, row: i64) -> bool {
        let Some(token) = self.get(column, row) else {
            return false;
        };

        AXES.iter().any(|&(dc, dr)| {
            let run = 1
                + self.count_from(column, row, dc, dr, token)
                + self.count_from(column, row, -dc, -dr, token);
            run >= WINNING_RUN
        })
    }

    /// Matching cells strictly beyond `(column, row)` in direction `(dc, dr)`.
    fn count_from(&self, column: i64, row: i64, dc: i64, dr: i64, token: Token) -> u32 {
        let mut run = 0;
        let (mut c, mut r) = (column + dc, row + dr);
        while run < WINNING_RUN - 1 && self.get(c, r) == Some(token) {
            run += 1;
            c += dc;
            r += dr;
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dimensions;

    /// Build a 4x4 board from columns listed bottom-up; 0 means empty.
    fn board_from_columns(columns: [[u8; 4]; 4]) -> Board {
        let mut board = Board::new(Dimensions::new(4, 4));
        for (c, cells) in columns.iter().enumerate() {
            for &cell in cells.iter().take_while(|&&v| v != 0) {
                board.drop_token(c as i64 + 1, Token(cell)).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_full_column_wins() {
        let mut board = Board::new(Dimensions::new(4, 4));
        for _ in 0..4 {
            board.drop_token(1, Token(1)).unwrap();
        }
        assert!(board.check_win(1, 4));
    }

    #[test]
    fn test_full_row_wins_from_any_cell() {
        let mut board = Board::new(Dimensions::new(4, 4));
        for c in 1..=4 {
            board.drop_token(c, Token(1)).unwrap();
        }
        assert!(board.check_win(4, 1));
        assert!(board.check_win(1, 1));
        assert!(board.check_win(2, 1));
    }

    #[test]
    fn test_main_diagonal_wins() {
        let board = board_from_columns([
            [1, 2, 2, 0],
            [2, 1, 0, 0],
            [2, 2, 1, 0],
            [2, 2, 2, 1],
        ]);
        assert!(board.check_win(4, 4));
        assert!(board.check_win(1, 1));
        assert!(board.check_win(3, 3));
    }

    #[test]
    fn test_secondary_diagonal_wins() {
        let board = board_from_columns([
            [2, 2, 2, 1],
            [2, 2, 1, 0],
            [2, 1, 1, 1],
            [1, 1, 0, 0],
        ]);
        assert!(board.check_win(1, 4));
        assert!(board.check_win(4, 1));
        assert!(board.check_win(2, 3));
    }

    #[test]
    fn test_no_win_detected() {
        let board = board_from_columns([
            [2, 2, 2, 0],
            [2, 2, 1, 0],
            [2, 1, 1, 1],
            [1, 1, 1, 0],
        ]);
        assert!(!board.check_win(4, 3));
    }

    #[test]
    fn test_run_of_three_does_not_win() {
        let mut board = Board::new(Dimensions::new(5, 5));
        for c in 1..=3 {
            board.drop_token(c, Token(1)).unwrap();
        }
        board.drop_token(4, Token(2)).unwrap();
        assert!(!board.check_win(3, 1));
    }

    #[test]
    fn test_run_longer_than_four_wins() {
        let mut board = Board::new(Dimensions::new(7, 4));
        for c in 1..=5 {
            board.drop_token(c, Token(1)).unwrap();
        }
        assert!(board.check_win(3, 1));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new(Dimensions::new(4, 4));
        assert!(!board.check_win(1, 1));
        assert!(!board.check_win(0, 0));
        assert!(!board.check_win(9, 9));
    }
}
