//! The [`Board`] value type.

use std::fmt;

use rand::Rng;

use crate::error::{QueensError, Result};

/// One queen per row; `columns[row]` is the column of that row's queen.
///
/// The length is fixed at construction and every column is in `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Smallest board size the search core accepts.
    pub const MIN_SIZE: usize = 2;

    /// Rejects board sizes that have no single-queen moves.
    pub fn check_size(n: usize) -> Result<()> {
        if n < Self::MIN_SIZE {
            return Err(QueensError::invalid(format!(
                "board_size must be at least {}, got {n}",
                Self::MIN_SIZE
            )));
        }
        Ok(())
    }

    /// Samples a board with each row's column drawn uniformly from `0..n`.
    ///
    /// Columns may repeat; the board is not forced to be a permutation.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let columns = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { columns }
    }

    /// Builds a board from explicit columns, checking every value is in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_queens::board::Board;
    ///
    /// let board = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
    /// assert_eq!(board.len(), 4);
    /// assert!(Board::from_columns(vec![0, 4, 1, 2]).is_err());
    /// ```
    pub fn from_columns(columns: Vec<usize>) -> Result<Self> {
        let n = columns.len();
        if n == 0 {
            return Err(QueensError::invalid("board must have at least one row"));
        }
        if let Some((row, &col)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            return Err(QueensError::invalid(format!(
                "column {col} in row {row} is outside 0..{n}"
            )));
        }
        Ok(Self { columns })
    }

    /// Returns a new board with the queen in `row` moved to `column`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range.
    pub fn with_move(&self, row: usize, column: usize) -> Self {
        assert!(
            column < self.columns.len(),
            "column {column} out of range for board of size {}",
            self.columns.len()
        );
        let mut columns = self.columns.clone();
        columns[row] = column;
        Self { columns }
    }

    /// Board size N (number of rows, and of columns).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false` for a constructed board.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, row: usize) -> usize {
        self.columns[row]
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &col in &self.columns {
            let line: Vec<&str> = (0..self.columns.len())
                .map(|c| if c == col { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_board_in_range() {
        let mut rng = create_rng(42);
        for n in 2..12 {
            let board = Board::random(n, &mut rng);
            assert_eq!(board.len(), n);
            assert!(board.columns().iter().all(|&c| c < n));
        }
    }

    #[test]
    fn test_check_size() {
        assert!(Board::check_size(0).is_err());
        assert!(Board::check_size(1).is_err());
        assert!(Board::check_size(2).is_ok());
    }

    #[test]
    fn test_from_columns_rejects_out_of_range() {
        assert!(Board::from_columns(vec![]).is_err());
        assert!(Board::from_columns(vec![0, 2]).is_err());
        assert!(Board::from_columns(vec![0, 1]).is_ok());
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::from_columns(vec![0, 1, 2, 3]).unwrap();
        let moved = board.with_move(2, 0);
        assert_eq!(board.columns(), &[0, 1, 2, 3]);
        assert_eq!(moved.columns(), &[0, 1, 0, 3]);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(
            board.to_string(),
            ". Q . .\n. . . Q\nQ . . .\n. . Q .\n"
        );
    }
}
