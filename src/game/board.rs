use crate::error::BoardError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Contents of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    OwnedBy(Player),
}

/// A Connect Four grid stored column by column. Row 0 is the bottom of each
/// column; pieces stack upward from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board<const C: usize = COLS, const R: usize = ROWS> {
    columns: [[Cell; R]; C],
}

impl<const C: usize, const R: usize> Board<C, R> {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; R]; C],
        }
    }

    /// Get the cell at a specific position, with row 0 at the bottom
    pub fn cell_at(&self, col: usize, row: usize) -> Result<Cell, BoardError> {
        if col >= C || row >= R {
            return Err(BoardError::CellOutOfRange { col, row });
        }
        Ok(self.columns[col][row])
    }

    /// Unchecked read for callers that already iterate inside the grid.
    pub(crate) fn get(&self, col: usize, row: usize) -> Cell {
        self.columns[col][row]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        self.check_column(col)?;
        Ok(self.top_occupied(col))
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..C).filter(|&col| !self.top_occupied(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        self.check_column(col)?;

        // Lowest empty row wins; anything above it must also be empty.
        let row = self.columns[col]
            .iter()
            .position(|&cell| cell == Cell::Empty)
            .ok_or(BoardError::ColumnFull { col })?;
        self.columns[col][row] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..C).all(|col| self.top_occupied(col))
    }

    /// Number of pieces stacked in a column
    pub fn height(&self, col: usize) -> Result<usize, BoardError> {
        self.check_column(col)?;
        Ok(self.columns[col]
            .iter()
            .take_while(|&&cell| cell != Cell::Empty)
            .count())
    }

    pub fn piece_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// The same position reflected left to right.
    pub fn mirrored(&self) -> Self {
        let mut columns = self.columns;
        columns.reverse();
        Board { columns }
    }

    fn top_occupied(&self, col: usize) -> bool {
        // A zero-height board has no room in any column.
        match R.checked_sub(1) {
            Some(top) => self.columns[col][top] != Cell::Empty,
            None => true,
        }
    }

    fn check_column(&self, col: usize) -> Result<(), BoardError> {
        if col >= C {
            return Err(BoardError::ColumnOutOfRange { col, cols: C });
        }
        Ok(())
    }
}

impl<const C: usize, const R: usize> Default for Board<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board: Board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(board.cell_at(col, row), Ok(Cell::Empty));
            }
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board: Board = Board::new();

        // First piece lands at the bottom
        let row = board.drop_piece(3, Player::Human).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.cell_at(3, 0), Ok(Cell::OwnedBy(Player::Human)));

        // Second piece stacks on top of it
        let row = board.drop_piece(3, Player::Automated).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.cell_at(3, 1), Ok(Cell::OwnedBy(Player::Automated)));
        assert_eq!(board.height(3), Ok(2));
    }

    #[test]
    fn test_drop_is_not_idempotent() {
        let mut board: Board = Board::new();
        board.drop_piece(0, Player::Human).unwrap();
        board.drop_piece(0, Player::Human).unwrap();
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board: Board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(2, Player::Human).unwrap();
        }

        assert_eq!(board.is_column_full(2), Ok(true));
        assert!(!board.legal_columns().contains(&2));
        assert_eq!(
            board.drop_piece(2, Player::Automated),
            Err(BoardError::ColumnFull { col: 2 })
        );
        assert_eq!(board.height(2), Ok(ROWS));
    }

    #[test]
    fn test_invalid_column() {
        let mut board: Board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::Human),
            Err(BoardError::ColumnOutOfRange { col: 7, cols: 7 })
        );
        assert!(board.is_column_full(7).unwrap_err().is_out_of_range());
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board: Board = Board::new();
        assert_eq!(
            board.cell_at(0, 6),
            Err(BoardError::CellOutOfRange { col: 0, row: 6 })
        );
        assert_eq!(
            board.cell_at(7, 0),
            Err(BoardError::CellOutOfRange { col: 7, row: 0 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board: Board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                board.drop_piece(col, Player::Human).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_mirrored() {
        let mut board: Board = Board::new();
        board.drop_piece(0, Player::Human).unwrap();
        board.drop_piece(5, Player::Automated).unwrap();

        let mirror = board.mirrored();
        assert_eq!(mirror.cell_at(6, 0), Ok(Cell::OwnedBy(Player::Human)));
        assert_eq!(mirror.cell_at(1, 0), Ok(Cell::OwnedBy(Player::Automated)));
        assert_eq!(mirror.mirrored(), board);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board: Board<3, 2> = Board::new();
        assert_eq!(board.legal_columns(), vec![0, 1, 2]);
        assert!(board.cell_at(2, 1).is_ok());
        assert!(board.cell_at(3, 0).unwrap_err().is_out_of_range());
        assert!(board.cell_at(0, 2).unwrap_err().is_out_of_range());
        board.drop_piece(1, Player::Human).unwrap();
        board.drop_piece(1, Player::Human).unwrap();
        assert_eq!(board.legal_columns(), vec![0, 2]);
        assert!(board.drop_piece(3, Player::Human).unwrap_err().is_out_of_range());
    }
}
