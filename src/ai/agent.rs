use crate::error::AgentError;
use crate::game::GameSession;

/// Anything that can choose a column for the player to move.
///
/// The chosen column is only a request: the session's placement rules decide
/// whether it is played.
pub trait Agent {
    /// Select a column given the current game session.
    fn select_column(&mut self, session: &GameSession) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Whether a person is choosing the moves. Rejected moves from an
    /// interactive agent are retried instead of treated as errors.
    fn is_interactive(&self) -> bool {
        false
    }
}
