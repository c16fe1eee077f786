//! Column-choosing strategies: minimax search, random play, and typed input.

mod agent;
pub mod heuristic;
mod human;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{score_move, Heuristic, WindowHeuristic};
pub use human::{column_letter, parse_column, HumanAgent};
pub use minimax::{search, MinimaxAgent, SearchResult, Searcher};
pub use random::RandomAgent;
