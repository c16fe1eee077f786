//! Win and terminal detection over 4-cell windows.
//!
//! Window enumeration is shared with the heuristic evaluator so both agree on
//! which runs exist. Nothing here is cached: every query rescans the board.

use std::ops::Range;

use super::board::{Board, Cell, CONNECT};
use super::player::Player;

/// Coordinates `(row, col)` of a completed run, in scan order.
pub type WinningLine = [(usize, usize); CONNECT];

/// Direction a window extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right (`\`)
    DiagonalDownRight,
    /// Down and to the left (`/`)
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by [`check_win`]
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row step, column step)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Rows and columns from which a full window fits on the board
    fn starts(self, width: usize, height: usize) -> (Range<usize>, Range<usize>) {
        let span = CONNECT - 1;
        match self {
            Direction::Horizontal => (0..height, 0..width - span),
            Direction::Vertical => (0..height - span, 0..width),
            Direction::DiagonalDownRight => (0..height - span, 0..width - span),
            Direction::DiagonalDownLeft => (0..height - span, span..width),
        }
    }
}

/// A 4-cell sample of the board along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    pub cells: [(usize, usize); CONNECT],
}

impl Window {
    fn starting_at(direction: Direction, row: usize, col: usize) -> Self {
        let (dr, dc) = direction.step();
        let mut cells = [(0, 0); CONNECT];
        for (k, cell) in cells.iter_mut().enumerate() {
            let k = k as isize;
            *cell = (
                (row as isize + dr * k) as usize,
                (col as isize + dc * k) as usize,
            );
        }
        Window { direction, cells }
    }

    /// Number of positions in this window holding `cell`
    pub fn count(&self, board: &Board, cell: Cell) -> usize {
        self.cells
            .iter()
            .filter(|&&(row, col)| board.get(row, col) == cell)
            .count()
    }
}

/// Every window on the board: direction by direction, row-major within each.
pub fn windows(board: &Board) -> impl Iterator<Item = Window> {
    let (width, height) = (board.width(), board.height());
    Direction::ALL.into_iter().flat_map(move |direction| {
        let (rows, cols) = direction.starts(width, height);
        rows.flat_map(move |row| {
            cols.clone()
                .map(move |col| Window::starting_at(direction, row, col))
        })
    })
}

/// First run of four belonging to `player`, if any.
pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    let cell = player.to_cell();
    windows(board)
        .find(|window| window.count(board, cell) == CONNECT)
        .map(|window| window.cells)
}

/// A win for either player, or no empty cell left.
pub fn is_terminal(board: &Board) -> bool {
    check_win(board, Player::Red).is_some()
        || check_win(board, Player::Yellow).is_some()
        || board.is_full()
}
