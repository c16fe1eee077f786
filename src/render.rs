//! Text rendering of a board, with the winning line marked.

use std::fmt;

use crossterm::style::{style, Stylize};

use crate::ai::column_letter;
use crate::game::{Board, Cell, WinningLine};

/// Display adapter for a board and, once the game is won, its winning line.
pub struct BoardView<'a> {
    board: &'a Board,
    winning: Option<&'a WinningLine>,
    color: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, winning: Option<&'a WinningLine>) -> Self {
        BoardView {
            board,
            winning,
            color: true,
        }
    }

    /// Toggle terminal colors. Without them winning cells are bracketed.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn is_winning(&self, row: usize, col: usize) -> bool {
        self.winning
            .is_some_and(|line| line.contains(&(row, col)))
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, row: usize, col: usize) -> fmt::Result {
        let digit = match self.board.get(row, col) {
            Cell::Empty => '0',
            Cell::Red => '1',
            Cell::Yellow => '2',
        };
        let winning = self.is_winning(row, col);

        if !self.color {
            return if winning {
                write!(f, "[{digit}]")
            } else {
                write!(f, " {digit} ")
            };
        }

        let text = format!(" {digit} ");
        if winning {
            write!(f, "{}", style(text).white().on_green())
        } else {
            match self.board.get(row, col) {
                Cell::Red => write!(f, "{}", style(text).white().on_red()),
                Cell::Yellow => write!(f, "{}", style(text).white().on_yellow()),
                Cell::Empty => write!(f, "{text}"),
            }
        }
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        if self.color {
            write!(f, "{}", style(text).white().on_blue())
        } else {
            write!(f, "{text}")
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.board.width();

        self.write_rule(f, "|")?;
        for col in 0..width {
            write!(f, " {} ", column_letter(col))?;
            self.write_rule(f, "|")?;
        }
        writeln!(f)?;

        for row in 0..self.board.height() {
            self.write_rule(f, "|")?;
            for col in 0..width {
                self.write_cell(f, row, col)?;
                self.write_rule(f, "|")?;
            }
            writeln!(f)?;
        }

        self.write_rule(f, &"=".repeat(4 * width + 1))?;
        writeln!(f)
    }
}
