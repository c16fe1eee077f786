//! Game loop: asks agents for columns, applies them to the session, and
//! reports progress until the game ends.

use std::io::Write;
use std::time::Duration;

use crate::ai::{column_letter, Agent};
use crate::error::DriverError;
use crate::game::{GameOutcome, GameSession, Player};
use crate::render::BoardView;

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Red is typed in, Yellow searches
    HumanVsAi,
    /// Both players search
    AiVsAi,
    /// Both players are typed in
    HumanVsHuman,
    /// Red is typed in, Yellow plays random columns
    HumanVsRandom,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsAi => "Human vs AI",
            Mode::AiVsAi => "AI vs AI",
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsRandom => "Human vs Random",
        }
    }

    /// Default name of the file the move log is written to
    pub fn results_file(self) -> &'static str {
        match self {
            Mode::HumanVsAi => "human_vs_ai_results.txt",
            Mode::AiVsAi => "ai_vs_ai_results.txt",
            Mode::HumanVsHuman => "human_vs_human_results.txt",
            Mode::HumanVsRandom => "results.txt",
        }
    }
}

/// The agents seated for a match.
pub enum Lineup<'a> {
    /// One agent moves for both players
    Shared(&'a mut dyn Agent),
    Split {
        red: &'a mut dyn Agent,
        yellow: &'a mut dyn Agent,
    },
}

impl<'a> Lineup<'a> {
    fn agent_for(&mut self, player: Player) -> &mut (dyn Agent + 'a) {
        match self {
            Lineup::Shared(agent) => &mut **agent,
            Lineup::Split { red, yellow } => match player {
                Player::Red => &mut **red,
                Player::Yellow => &mut **yellow,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Pause before each non-interactive move
    pub think_delay: Duration,
    pub color: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            think_delay: Duration::ZERO,
            color: false,
        }
    }
}

/// Play `session` to completion.
///
/// The session is updated after every accepted move, so when an error stops
/// the match it still holds the moves played so far.
pub fn run_match<W: Write>(
    mut lineup: Lineup<'_>,
    session: &mut GameSession,
    options: &MatchOptions,
    out: &mut W,
) -> Result<(), DriverError> {
    write!(out, "\n{}", BoardView::new(session.board(), None).color(options.color))?;

    while !session.is_terminal() {
        let player = session.current_player();
        let agent = lineup.agent_for(player);

        if !agent.is_interactive() {
            writeln!(out, "\nPlayer {} is thinking...", player.number())?;
            if !options.think_delay.is_zero() {
                std::thread::sleep(options.think_delay);
            }
        }

        let column = agent
            .select_column(session)
            .map_err(|source| DriverError::Agent {
                agent: agent.name().to_string(),
                source,
            })?;

        match session.apply_move_mut(column) {
            Ok(()) => {}
            Err(err) if agent.is_interactive() => {
                log::debug!("rejected column {column} from {}: {err}", agent.name());
                writeln!(out, "Invalid column, try again.")?;
                continue;
            }
            Err(source) => {
                return Err(DriverError::RejectedMove {
                    agent: agent.name().to_string(),
                    column,
                    source,
                })
            }
        }

        log::info!("{} ({}) played column {column}", player.name(), agent.name());
        writeln!(
            out,
            "Player {} placed a piece in column {}",
            player.number(),
            column_letter(column)
        )?;

        match session.outcome() {
            Some(GameOutcome::Winner(winner)) => {
                writeln!(out, "Player {} wins!", winner.number())?;
            }
            Some(GameOutcome::Draw) => writeln!(out, "It's a draw!")?,
            None => {}
        }

        write!(
            out,
            "\n{}",
            BoardView::new(session.board(), session.winning_line()).color(options.color)
        )?;
    }

    if let Some(outcome) = session.outcome() {
        log::info!("game over after {} moves: {outcome:?}", session.moves().len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HumanAgent, MinimaxAgent, RandomAgent};
    use crate::config::SearchConfig;
    use crate::error::AgentError;
    use crate::game::Move;
    use std::io::Cursor;

    /// Plays a fixed list of columns, then gives up.
    struct Scripted {
        columns: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(columns: &[usize]) -> Self {
            Scripted {
                columns: columns.to_vec(),
                next: 0,
            }
        }
    }

    impl Agent for Scripted {
        fn select_column(&mut self, _session: &GameSession) -> Result<usize, AgentError> {
            let column = self.columns.get(self.next).copied().ok_or(AgentError::NoMove)?;
            self.next += 1;
            Ok(column)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn human_game_retries_invalid_columns() {
        // Red stacks column A, Yellow column B; the H is off the board
        let input = "a\nb\nh\na\nb\na\nb\na\n";
        let mut human = HumanAgent::new(Cursor::new(input), Vec::new());
        let mut out = Vec::new();

        let mut session = GameSession::initial();
        run_match(
            Lineup::Shared(&mut human),
            &mut session,
            &MatchOptions::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert_eq!(session.moves().len(), 7);
        assert_eq!(
            session.moves().to_string(),
            "Moves:\n<1, 0>, <2, 1>, <1, 0>, <2, 1>, <1, 0>, <2, 1>, <1, 0>\n"
        );

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid column, try again.").count(), 1);
        assert!(text.contains("Player 1 wins!"));
        assert!(text.contains("[1]"));
    }

    #[test]
    fn human_input_running_out_keeps_moves_played() {
        let mut human = HumanAgent::new(Cursor::new("d\ne\n"), Vec::new());
        let mut session = GameSession::initial();
        let mut out = Vec::new();
        let err = run_match(
            Lineup::Shared(&mut human),
            &mut session,
            &MatchOptions::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DriverError::Agent {
                source: AgentError::InputClosed,
                ..
            }
        ));
        assert!(!session.is_terminal());
        assert_eq!(session.moves().to_string(), "Moves:\n<1, 3>, <2, 4>\n");
        assert_eq!(session.current_player(), Player::Red);
    }

    #[test]
    fn rejected_computer_move_is_an_error() {
        let mut red = Scripted::new(&[0, 0, 0, 0]);
        let mut yellow = Scripted::new(&[0, 0, 0]);
        let mut session = GameSession::initial();
        let mut out = Vec::new();
        let err = run_match(
            Lineup::Split {
                red: &mut red,
                yellow: &mut yellow,
            },
            &mut session,
            &MatchOptions::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, DriverError::RejectedMove { column: 0, .. }));
        assert_eq!(session.moves().len(), 6);
    }

    #[test]
    fn scripted_draw_reports_draw() {
        use crate::game::fixtures::DRAW_SEQUENCE;
        let red: Vec<usize> = DRAW_SEQUENCE.iter().step_by(2).copied().collect();
        let yellow: Vec<usize> = DRAW_SEQUENCE.iter().skip(1).step_by(2).copied().collect();
        let (mut red, mut yellow) = (Scripted::new(&red), Scripted::new(&yellow));
        let mut out = Vec::new();

        let mut session = GameSession::initial();
        run_match(
            Lineup::Split {
                red: &mut red,
                yellow: &mut yellow,
            },
            &mut session,
            &MatchOptions::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(session.outcome(), Some(GameOutcome::Draw));
        assert!(String::from_utf8(out).unwrap().contains("It's a draw!"));
    }

    #[test]
    fn ai_vs_random_finishes_with_full_log() {
        let mut red = MinimaxAgent::new(SearchConfig::default());
        let mut yellow = RandomAgent::seeded(11);
        let mut out = Vec::new();

        let mut session = GameSession::initial();
        run_match(
            Lineup::Split {
                red: &mut red,
                yellow: &mut yellow,
            },
            &mut session,
            &MatchOptions::default(),
            &mut out,
        )
        .unwrap();

        assert!(session.is_terminal());
        let players: Vec<Player> = session.moves().iter().map(|m: &Move| m.player).collect();
        for (i, player) in players.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            assert_eq!(*player, expected);
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player 1 is thinking..."));
    }

    #[test]
    fn mode_file_names() {
        assert_eq!(Mode::HumanVsAi.results_file(), "human_vs_ai_results.txt");
        assert_eq!(Mode::AiVsAi.results_file(), "ai_vs_ai_results.txt");
        assert_eq!(Mode::HumanVsHuman.results_file(), "human_vs_human_results.txt");
        assert_eq!(Mode::HumanVsRandom.results_file(), "results.txt");
        assert_eq!(Mode::AiVsAi.label(), "AI vs AI");
    }
}
