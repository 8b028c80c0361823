use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};
use poker_odds::{
    bluff_report, display_name, estimate_equity, evaluate_hand, odds_engine::label::cards_str,
    parse_card_list, OddsConfig,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "poker-odds", about = "Poker hand ranking and Monte Carlo odds")]
struct Cli {
    /// JSON file with estimator parameters.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a hand of five or more cards, e.g. `eval Ah Kh Qh Jh Th`.
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Estimate the win ratio against random opponents.
    Equity {
        /// Two hole cards, e.g. "AhKh" or "Ah Kh".
        #[arg(long)]
        hole: String,
        /// Known community cards.
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 1)]
        opponents: usize,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Decide whether a bluff is signalled.
    Bluff {
        #[arg(long)]
        hole: String,
        #[arg(long, default_value = "")]
        board: String,
        /// Reference index into the descending sample.
        #[arg(long)]
        percentile: Option<usize>,
        #[arg(long)]
        divisor: Option<f64>,
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    #[arg(long, short = 'n')]
    trials: Option<usize>,
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse cards given either space separated or packed ("AhKh").
fn parse_hand(text: &str) -> Result<Vec<poker_odds::Card>> {
    let spaced: String = if text.contains(|c: char| c.is_whitespace() || c == ',') {
        text.to_string()
    } else {
        let chars: Vec<char> = text.chars().collect();
        chars.chunks(2).map(|c| c.iter().collect::<String>()).collect::<Vec<_>>().join(" ")
    };
    Ok(parse_card_list(&spaced)?)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => OddsConfig::load(path)?,
        None => OddsConfig::default(),
    };

    match cli.command {
        Command::Eval { cards } => {
            let cards = parse_hand(&cards.join(" "))?;
            let score = evaluate_hand(&cards)?;
            println!(
                "{}: {} [{}] score {score}",
                cards_str(&cards),
                display_name(score),
                score.category()
            );
        }
        Command::Equity { hole, board, opponents, run } => {
            let hole = parse_hand(&hole)?;
            let board = parse_hand(&board)?;
            if let Some(trials) = run.trials {
                config.equity.trials = trials;
            }
            if run.time_limit_ms.is_some() {
                config.equity.time_limit_ms = run.time_limit_ms;
            }
            config.equity.validate()?;

            info!("Estimating equity with {} trials", config.equity.trials);
            let result =
                estimate_equity(&mut run.rng(), &hole, &board, opponents, &config.equity.budget())?;
            if run.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("win ratio {:.4} ({}/{} trials)", result.ratio, result.wins, result.trials);
            }
        }
        Command::Bluff { hole, board, percentile, divisor, run } => {
            let hole = parse_hand(&hole)?;
            let board = parse_hand(&board)?;
            if let Some(trials) = run.trials {
                config.bluff.trials = trials;
            }
            if let Some(index) = percentile {
                config.bluff.percentile_index = index;
            }
            if let Some(divisor) = divisor {
                config.bluff.divisor = divisor;
            }
            if run.time_limit_ms.is_some() {
                config.bluff.time_limit_ms = run.time_limit_ms;
            }
            config.bluff.validate()?;

            info!("Sampling {} hands for bluff signal", config.bluff.trials);
            let report =
                bluff_report(&mut run.rng(), &hole, &board, &config.bluff, &config.bluff.budget())?;
            if run.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "bluff {} (reference {} {}, average {:.0})",
                    if report.should_bluff { "yes" } else { "no" },
                    report.reference,
                    report.reference.category(),
                    report.average
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
