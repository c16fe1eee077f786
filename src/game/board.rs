pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Shortest run that wins; also the window length used by scoring.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Rejected placement. The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board {width}x{height} is too small: both sides must be at least 4")]
    TooSmall { width: usize, height: usize },

    #[error("a game must start on an empty board")]
    NotEmpty,
}

/// Grid of cells stored row-major. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty standard 7x6 board
    pub fn new() -> Self {
        Board {
            width: COLS,
            height: ROWS,
            cells: vec![Cell::Empty; COLS * ROWS],
        }
    }

    /// Create an empty board of another size.
    ///
    /// Every dimension must admit a 4-cell window. The heuristic weights are
    /// tuned for 7x6 only; other sizes play correctly but are not tuned.
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if width < CONNECT || height < CONNECT {
            return Err(BoardError::TooSmall { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the middle column, rounded down
    pub fn center_column(&self) -> usize {
        self.width / 2
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column. Out-of-range columns count as full.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.width {
            return self.height;
        }
        (0..self.height)
            .filter(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }

        let stacked = self.column_height(col);
        if stacked == self.height {
            return Err(MoveError::ColumnFull(col));
        }

        // Lands directly on top of the stack, so columns stay contiguous from the floor
        let row = self.height - 1 - stacked;
        self.cells[row * self.width + col] = cell;
        Ok(row)
    }

    /// True when no piece has been placed
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Number of cells holding `cell` in the given column
    pub fn count_in_column(&self, col: usize, cell: Cell) -> usize {
        (0..self.height)
            .filter(|&row| self.get(row, col) == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::assert_gravity;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        let before = board.clone();
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
        assert!(!board.legal_columns().contains(&0));
    }

    #[test]
    fn test_invalid_column_leaves_board_unchanged() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::Red).unwrap();
        let before = board.clone();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.drop_piece(usize::MAX, Cell::Red), Err(MoveError::InvalidColumn(usize::MAX)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_gravity_holds_for_mixed_drops() {
        let mut board = Board::new();
        let sequence = [3, 3, 0, 6, 6, 6, 2, 3, 1, 0, 0, 5, 5, 4, 3, 3, 3, 3];
        for (i, &col) in sequence.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            let _ = board.drop_piece(col, cell);
            assert_gravity(&board);
        }
        assert_eq!(board.column_height(3), 6);
    }

    #[test]
    fn test_with_size() {
        let board = Board::with_size(9, 7).unwrap();
        assert_eq!(board.width(), 9);
        assert_eq!(board.center_column(), 4);
        assert_eq!(
            Board::with_size(3, 6),
            Err(BoardError::TooSmall { width: 3, height: 6 })
        );
        assert!(Board::with_size(7, 2).is_err());
    }

    #[test]
    fn test_is_empty() {
        let mut board = Board::with_size(8, 7).unwrap();
        assert!(board.is_empty());
        board.drop_piece(7, Cell::Yellow).unwrap();
        assert!(!board.is_empty());
        assert_eq!(board.column_height(7), 1);
        assert_eq!(board.column_height(8), 7);
    }

    #[test]
    fn test_count_in_column() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(board.count_in_column(3, Cell::Red), 2);
        assert_eq!(board.count_in_column(3, Cell::Yellow), 1);
        assert_eq!(board.count_in_column(3, Cell::Empty), 3);
    }
}
