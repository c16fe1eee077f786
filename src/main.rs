use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_minimax::ai::{HumanAgent, MinimaxAgent, RandomAgent};
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::driver::{run_match, Lineup, MatchOptions, Mode};
use connect_four_minimax::game::GameSession;

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Who plays whom
    #[arg(value_enum, default_value = "human-vs-ai")]
    mode: Mode,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Write the move log here instead of the mode's default file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Disable board colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("validating settings")?;

    println!("Mode: {}", cli.mode.label());

    let options = MatchOptions {
        think_delay: Duration::from_millis(config.game.think_delay_ms),
        color: config.game.color && !cli.no_color,
    };

    let mut human = HumanAgent::new(io::stdin().lock(), io::stdout());
    let mut red_ai = MinimaxAgent::new(config.search);
    let mut yellow_ai = MinimaxAgent::new(config.search);
    let mut random = match cli.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };

    let lineup = match cli.mode {
        Mode::HumanVsAi => Lineup::Split {
            red: &mut human,
            yellow: &mut yellow_ai,
        },
        Mode::AiVsAi => Lineup::Split {
            red: &mut red_ai,
            yellow: &mut yellow_ai,
        },
        Mode::HumanVsHuman => Lineup::Shared(&mut human),
        Mode::HumanVsRandom => Lineup::Split {
            red: &mut human,
            yellow: &mut random,
        },
    };

    let mut session = GameSession::initial();
    let played = run_match(lineup, &mut session, &options, &mut io::stdout());

    // Moves made before a failure are still saved
    let path = cli
        .output
        .unwrap_or_else(|| config.game.output_dir.join(cli.mode.results_file()));
    session.moves().write_to(&path)?;
    println!("Moves written to {}", path.display());

    played.context("playing the game")?;
    Ok(())
}
