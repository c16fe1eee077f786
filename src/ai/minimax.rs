//! Depth-limited minimax with alpha-beta pruning.
//!
//! Leaf scores are taken from the perspective of the `player` argument the
//! leaf was reached with, and the win sentinels are inverted relative to the
//! textbook convention: a line owned by that player scores `-WIN_SCORE`, a
//! line owned by the other player `+WIN_SCORE`. The player argument is carried
//! unchanged into a minimizing child and swapped to the opponent when a
//! minimizing node descends, so the side whose perspective a leaf takes
//! alternates every two plies. Both behaviours are load-bearing for the move
//! choices the engine makes and are kept exactly.

use crate::config::SearchConfig;
use crate::error::AgentError;
use crate::game::{check_win, is_terminal, Board, GameSession, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Magnitude of the score reported for a decided position.
pub const WIN_SCORE: i32 = 999;
/// Score of a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

/// Outcome of one search call. `column` is `None` at leaves and when no
/// column could be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Search with the default heuristic.
pub fn search(
    board: &Board,
    player: Player,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult {
    Searcher::new(&WindowHeuristic).search(board, player, depth, alpha, beta, maximizing)
}

/// Runs searches against one heuristic and counts visited nodes.
pub struct Searcher<'h> {
    heuristic: &'h dyn Heuristic,
    nodes: u64,
}

impl<'h> Searcher<'h> {
    pub fn new(heuristic: &'h dyn Heuristic) -> Self {
        Searcher { heuristic, nodes: 0 }
    }

    /// Nodes visited since this searcher was created
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search(
        &mut self,
        board: &Board,
        player: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || is_terminal(board) {
            return SearchResult {
                score: self.leaf_score(board, player),
                column: None,
            };
        }

        let mover = if maximizing { player } else { player.other() };
        let mut best_score = if maximizing { -WIN_SCORE } else { WIN_SCORE };
        let mut best_column = None;
        // Reported when no child beats the initial bound
        let mut first_playable = None;

        for col in 0..board.width() {
            // Each branch explores its own copy; the caller's board is never touched
            let mut next = board.clone();
            if next.drop_piece(col, mover.to_cell()).is_err() {
                continue;
            }
            if first_playable.is_none() {
                first_playable = Some(col);
            }

            if maximizing {
                let score = self.search(&next, player, depth - 1, alpha, beta, false).score;
                if score > best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                alpha = alpha.max(best_score);
            } else {
                let score = self.search(&next, mover, depth - 1, alpha, beta, true).score;
                if score < best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            score: best_score,
            column: best_column.or(first_playable),
        }
    }

    fn leaf_score(&self, board: &Board, player: Player) -> i32 {
        if check_win(board, player).is_some() {
            -WIN_SCORE
        } else if check_win(board, player.other()).is_some() {
            WIN_SCORE
        } else if board.is_full() {
            DRAW_SCORE
        } else {
            self.heuristic.evaluate(board, player)
        }
    }
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        MinimaxAgent {
            config,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { config, heuristic }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, session: &GameSession) -> Result<usize, AgentError> {
        let player = session.current_player();
        let mut searcher = Searcher::new(self.heuristic.as_ref());
        let result = searcher.search(
            session.board(),
            player,
            self.config.depth,
            self.config.alpha,
            self.config.beta,
            true,
        );
        log::debug!(
            "{} search: depth {}, {} nodes, score {}, column {:?}",
            player.name(),
            self.config.depth,
            searcher.nodes(),
            result.score,
            result.column
        );
        result.column.ok_or(AgentError::NoMove)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
