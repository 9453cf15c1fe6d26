//! getdeep CLI - inspect, export, reset and simulate persisted game progress.
//!
//! Results go to stdout as JSON; logs go to stderr. Failures print
//! `error[CODE]: detail` and exit with status 1.

mod simulate;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use getdeep::domain::Tier;
use getdeep::telemetry::{init_tracing, LogFormat};
use getdeep::{build_game, AnyPrefs, AppError, GameConfig, GameFlowService, StoreProfile};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "getdeep")]
#[command(about = "Let's Get Deep: question game progress tool")]
struct Args {
    /// Progress file, or `:memory:` for a throwaway store (overrides GETDEEP_STORE)
    #[arg(long, global = true)]
    store: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resume the session and print its snapshot
    Status,
    /// Lifetime usage per tier
    Stats,
    /// Texts of used questions
    Used {
        /// Only this tier
        #[arg(long, value_enum)]
        tier: Option<TierArg>,
    },
    /// Dump everything persisted
    Export,
    /// Forget all progress
    Reset,
    /// Play rounds automatically, rejecting some draws at random
    Simulate {
        /// Rounds to complete
        #[arg(short, long, default_value = "1")]
        rounds: u32,

        /// Probability of rejecting a drawn question
        #[arg(long, default_value = "0.2")]
        reject_rate: f64,

        /// Seed for draws and reject decisions
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierArg {
    IceBreaker,
    Deep,
    Deeper,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::IceBreaker => Tier::IceBreaker,
            TierArg::Deep => Tier::Deep,
            TierArg::Deeper => Tier::Deeper,
        }
    }
}

#[derive(Serialize)]
struct ResetReport {
    reset: bool,
    progress_summary: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_tracing(format, filter);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.code());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = GameConfig::from_env()?;
    if let Some(raw) = &args.store {
        config.store = StoreProfile::parse(raw)?;
    }

    match args.command {
        Command::Status => {
            let mut game = open(config)?;
            game.initialize_game()?;
            print_json(&game.snapshot())
        }
        Command::Stats => print_json(&open(config)?.stats()),
        Command::Used { tier } => {
            let game = open(config)?;
            let mut texts = game.store().used_question_texts(game.bank())?;
            if let Some(tier) = tier.map(Tier::from) {
                texts.retain(|t, _| *t == tier);
            }
            print_json(&texts)
        }
        Command::Export => print_json(&open(config)?.store().export()),
        Command::Reset => {
            let mut game = open(config)?;
            game.reset()?;
            print_json(&ResetReport {
                reset: true,
                progress_summary: game.progress_summary(),
            })
        }
        Command::Simulate {
            rounds,
            reject_rate,
            seed,
        } => {
            if !(0.0..=1.0).contains(&reject_rate) {
                return Err(AppError::config(format!(
                    "--reject-rate must be within 0..=1, got {reject_rate}"
                )));
            }
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            let seed = config.seed;
            let mut game = open(config)?;
            let report = simulate::run(&mut game, rounds, reject_rate, seed)?;
            print_json(&report)
        }
    }
}

fn open(config: GameConfig) -> Result<GameFlowService<AnyPrefs>, AppError> {
    debug!(store = ?config.store, "Opening game");
    build_game().with_config(config).build()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config(format!("failed to encode output: {e}")))?;
    println!("{out}");
    Ok(())
}

