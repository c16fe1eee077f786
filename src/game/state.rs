use super::board::{Board, BoardError, MoveError};
use super::moves::{place_piece, MoveLog};
use super::player::Player;
use super::win::{check_win, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the game is already over")]
    GameOver,
}

/// Everything one game carries between turns.
///
/// Turns are transitions from one session value to the next; nothing about the
/// game lives outside this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    moves: MoveLog,
    current_player: Player,
    outcome: Option<GameOutcome>,
    winning_line: Option<WinningLine>,
}

impl GameSession {
    /// Create initial game session on the standard board
    pub fn initial() -> Self {
        Self::starting_on(Board::new())
    }

    /// Start a game on an empty board of any size, Red to move.
    ///
    /// The move log must account for every piece, so a board that already
    /// holds pieces is rejected.
    pub fn with_board(board: Board) -> Result<Self, BoardError> {
        if !board.is_empty() {
            return Err(BoardError::NotEmpty);
        }
        Ok(Self::starting_on(board))
    }

    fn starting_on(board: Board) -> Self {
        GameSession {
            board,
            moves: MoveLog::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
            winning_line: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &MoveLog {
        &self.moves
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Cells of the completed run once someone has won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return the next session. `self` is left as it was.
    pub fn apply_move(&self, column: usize) -> Result<GameSession, TurnError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. On error the session is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), TurnError> {
        if self.is_terminal() {
            return Err(TurnError::GameOver);
        }

        let mover = self.current_player;
        place_piece(&mut self.board, &mut self.moves, mover, column)?;

        if let Some(line) = check_win(&self.board, mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();

        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::initial()
    }
}
