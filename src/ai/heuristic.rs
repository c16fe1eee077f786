use crate::game::win::windows;
use crate::game::{Board, Cell, Player, CONNECT};

/// Bonus per own piece in the center column.
pub const CENTER_WEIGHT: i32 = 3;
/// A window filled with the player's own pieces.
pub const FOUR_SCORE: i32 = 100;
/// Three own pieces and one empty cell.
pub const THREE_SCORE: i32 = 5;
/// Two own pieces and two empty cells.
pub const TWO_SCORE: i32 = 2;
/// Three opponent pieces and one empty cell.
pub const OPPONENT_THREE_PENALTY: i32 = -4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Center bias plus a sliding-window count of open lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        score_move(board, player)
    }
}

/// Score one window given how many cells are own, opponent and empty.
pub fn evaluate_window(own: usize, opp: usize, empty: usize) -> i32 {
    let mut score = 0;

    if own == CONNECT {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }

    score
}

/// Static score of `board` for `player`. Only meaningful on non-terminal boards.
pub fn score_move(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let center = board.count_in_column(board.center_column(), own_cell) as i32 * CENTER_WEIGHT;

    let lines: i32 = windows(board)
        .map(|window| {
            evaluate_window(
                window.count(board, own_cell),
                window.count(board, opp_cell),
                window.count(board, Cell::Empty),
            )
        })
        .sum();

    center + lines
}
