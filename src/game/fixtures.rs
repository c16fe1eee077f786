//! Boards shared by tests across modules.

use super::{Board, Cell, Player};

/// Alternating column sequence (Red first) that fills the board without
/// either side ever completing four in a row.
pub const DRAW_SEQUENCE: [usize; 42] = [
    0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, //
    2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, //
    4, 5, 4, 5, 5, 4, 5, 4, 4, 5, 4, 5, //
    6, 6, 6, 6, 6, 6,
];

/// Board reached by alternating drops, Red first.
pub fn board_from_columns(columns: &[usize]) -> Board {
    let mut board = Board::new();
    let mut player = Player::Red;
    for &col in columns {
        board.drop_piece(col, player.to_cell()).unwrap();
        player = player.other();
    }
    board
}

/// Full board with no four in a row for either player.
pub fn drawn_board() -> Board {
    board_from_columns(&DRAW_SEQUENCE)
}

/// Board from a top-down picture: `R`, `Y`, anything else empty.
/// Pieces are dropped bottom-up so gravity holds for any valid picture.
pub fn board_from_rows(rows: [&str; 6]) -> Board {
    let mut board = Board::new();
    for line in rows.iter().rev() {
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                'R' => Cell::Red,
                'Y' => Cell::Yellow,
                _ => continue,
            };
            board.drop_piece(col, cell).unwrap();
        }
    }
    board
}

/// Panics if any piece sits above an empty cell.
pub fn assert_gravity(board: &Board) {
    for col in 0..board.width() {
        let mut seen_piece = false;
        for row in 0..board.height() {
            let occupied = board.get(row, col) != Cell::Empty;
            assert!(
                !seen_piece || occupied,
                "floating piece above empty cell at ({row}, {col})"
            );
            seen_piece |= occupied;
        }
    }
}
