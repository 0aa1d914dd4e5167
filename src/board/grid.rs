//! Board storage and token dropping.
//!
//! ## Layout
//!
//! Cells live in one flat, column-major `Vec`: column `c`, row `r`
//! (both 0-based internally) sits at `c * rows + r`. Row 0 is the bottom.
//! The public API is 1-indexed for both columns and rows.
//!
//! Columns arrive as raw request integers, so every entry point takes `i64`
//! and bounds-checks it explicitly.

use serde::{Deserialize, Serialize};

use crate::core::Token;

/// Board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub columns: u32,
    pub rows: u32,
}

impl Dimensions {
    /// Create a new dimensions value.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// A drop was rejected. The board is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot drop a token into column {column}")]
pub struct IllegalDrop {
    pub column: i64,
}

/// Replaying a sequence of drops failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("drop #{index} into column {column} is illegal")]
    IllegalDrop { index: usize, column: i64 },

    #[error("move {turn} was made by unknown player {player}")]
    UnknownPlayer { turn: u32, player: String },
}

/// The grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Option<Token>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
        }
    }

    /// Board size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// 0-based column for a 1-based request column, if it exists.
    fn column_index(&self, column: i64) -> Option<usize> {
        if column >= 1 && column <= i64::from(self.dimensions.columns) {
            Some((column - 1) as usize)
        } else {
            None
        }
    }

    /// 0-based row for a 1-based request row, if it exists.
    fn row_index(&self, row: i64) -> Option<usize> {
        if row >= 1 && row <= i64::from(self.dimensions.rows) {
            Some((row - 1) as usize)
        } else {
            None
        }
    }

    fn column_cells(&self, col: usize) -> &[Option<Token>] {
        let rows = self.dimensions.rows as usize;
        &self.cells[col * rows..(col + 1) * rows]
    }

    /// Token at a 0-based cell. Caller guarantees bounds.
    pub(super) fn cell(&self, col: usize, row: usize) -> Option<Token> {
        self.cells[col * self.dimensions.rows as usize + row]
    }

    /// Token at a 1-based cell; `None` when empty or out of range.
    #[must_use]
    pub fn get(&self, column: i64, row: i64) -> Option<Token> {
        let col = self.column_index(column)?;
        let row = self.row_index(row)?;
        self.cell(col, row)
    }

    /// Number of tokens in a column. Zero for columns that don't exist.
    #[must_use]
    pub fn height(&self, column: i64) -> u32 {
        match self.column_index(column) {
            Some(col) => self.column_cells(col).iter().take_while(|c| c.is_some()).count() as u32,
            None => 0,
        }
    }

    /// Can this column accept another token?
    ///
    /// False for columns outside `[1, columns]` and for full columns.
    #[must_use]
    pub fn can_drop(&self, column: i64) -> bool {
        match self.column_index(column) {
            Some(col) => self.column_cells(col).last().is_some_and(Option::is_none),
            None => false,
        }
    }

    /// Drop a token into a column.
    ///
    /// Returns the 1-based row the token landed in. Fails without touching
    /// the board when `can_drop(column)` is false.
    pub fn drop_token(&mut self, column: i64, token: Token) -> Result<u32, IllegalDrop> {
        if !self.can_drop(column) {
            return Err(IllegalDrop { column });
        }
        let col = self.column_index(column).ok_or(IllegalDrop { column })?;
        let row = self.height(column) as usize;
        let rows = self.dimensions.rows as usize;
        self.cells[col * rows + row] = Some(token);
        Ok(row as u32 + 1)
    }

    /// Check if every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (1..=i64::from(self.dimensions.columns)).all(|c| !self.can_drop(c))
    }

    /// Apply drops in order, stopping at the first illegal one.
    ///
    /// Drops before the failure stay on the board; nothing after it is
    /// applied.
    pub fn apply_drops<I>(&mut self, drops: I) -> Result<(), ReplayError>
    where
        I: IntoIterator<Item = (i64, Token)>,
    {
        for (index, (column, token)) in drops.into_iter().enumerate() {
            self.drop_token(column, token)
                .map_err(|e| ReplayError::IllegalDrop { index, column: e.column })?;
        }
        Ok(())
    }
}
