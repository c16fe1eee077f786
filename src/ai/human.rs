use std::io::{BufRead, Write};

use crate::error::AgentError;
use crate::game::GameSession;

use super::agent::Agent;

/// Map a column letter (`A` is column 0, case-insensitive) to an index.
///
/// Nothing is validated here beyond picking the first non-blank character:
/// letters past the board map to out-of-range indices, and other characters
/// map to `usize::MAX`, so the placement rules reject them.
pub fn parse_column(input: &str) -> Option<usize> {
    let ch = input.trim().chars().next()?.to_ascii_uppercase();
    Some(match ch {
        'A'..='Z' => ch as usize - 'A' as usize,
        _ => usize::MAX,
    })
}

/// Column letter for display
pub fn column_letter(column: usize) -> char {
    (b'A' + (column % 26) as u8) as char
}

/// Reads columns typed by a person.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_column(&mut self, session: &GameSession) -> Result<usize, AgentError> {
        loop {
            write!(
                self.output,
                "\nPlayer {}, enter column: ",
                session.current_player().number()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }
            // Blank lines just prompt again
            if let Some(column) = parse_column(&line) {
                return Ok(column);
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
