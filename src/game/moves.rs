use std::fmt;
use std::path::Path;

use super::board::{Board, MoveError};
use super::player::Player;
use crate::error::MoveLogError;

/// One placement: who played where (zero-based column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub column: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.player.number(), self.column)
    }
}

/// Append-only record of a game's moves in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Write the log in its text form, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), MoveLogError> {
        std::fs::write(path, self.to_string()).map_err(|source| MoveLogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moves:")?;
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{mv}")?;
        }
        writeln!(f)
    }
}

/// Drop `player`'s piece into `column` and record the move.
///
/// Returns the landing row. On error neither the board nor the log changes.
pub fn place_piece(
    board: &mut Board,
    moves: &mut MoveLog,
    player: Player,
    column: usize,
) -> Result<usize, MoveError> {
    let row = board.drop_piece(column, player.to_cell())?;
    moves.moves.push(Move { player, column });
    Ok(row)
}
