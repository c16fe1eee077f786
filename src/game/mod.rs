//! Core Connect Four game logic: board, players, the move log, win detection,
//! and the game session with its turn transitions.

mod board;
mod moves;
mod player;
mod state;
pub mod win;

#[cfg(test)]
pub(crate) mod fixtures;

pub use board::{Board, BoardError, Cell, MoveError, COLS, CONNECT, ROWS};
pub use moves::{place_piece, Move, MoveLog};
pub use player::Player;
pub use state::{GameOutcome, GameSession, TurnError};
pub use win::{check_win, is_terminal, WinningLine};
