//! `extremalctl`: run chunked min/max scans and the bundled exercises from
//! the command line.

mod input;
mod scan;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use extremal_core::exercises::{
    GuessGame, bisect, check_brackets, factorial, fizzbuzz, is_exact_palindrome, is_palindrome,
    reverse_string,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::scan::{RunningArgs, ScanArgs};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "extremalctl")]
#[command(about = "Cancelable, progress-reporting min/max scans and small text/number exercises")]
struct Cli {
    /// Scanner config file (TOML or JSON). Falls back to EXTREMAL_CONFIG_PATH,
    /// EXTREMAL_CONFIG_JSON and ./extremal.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the min, max or both of a list of numbers in chunks
    Scan(ScanArgs),
    /// Print every new best value while walking a list of numbers
    Running(RunningArgs),
    /// Check that (), [] and {} are balanced
    Brackets { text: String },
    /// Check whether text reads the same backwards
    Palindrome {
        text: String,
        /// Compare every character instead of letters and digits only
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Reverse text by characters
    Reverse { text: String },
    /// Print the FizzBuzz sequence
    Fizzbuzz {
        #[arg(long, default_value_t = 100)]
        upto: u64,
    },
    /// Print n!
    Factorial { n: u32 },
    /// Let the bisecting solver guess a number and print its guesses
    Guess {
        /// Number to find; drawn at random from the range when omitted
        #[arg(long, allow_hyphen_values = true)]
        secret: Option<i64>,
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        low: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        high: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // Keep stdout clean for results. Override via RUST_LOG.
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Scan(args) => scan::run_scan(args, cli.config).await?,
        Command::Running(args) => scan::run_running(args).await?,
        Command::Brackets { text } => match check_brackets(&text) {
            Ok(()) => println!("balanced"),
            Err(err) => bail!("unbalanced: {err}"),
        },
        Command::Palindrome { text, strict } => {
            let palindrome = if strict {
                is_exact_palindrome(&text)
            } else {
                is_palindrome(&text)
            };
            println!("{palindrome}");
        }
        Command::Reverse { text } => println!("{}", reverse_string(&text)),
        Command::Fizzbuzz { upto } => {
            for entry in fizzbuzz(upto) {
                println!("{entry}");
            }
        }
        Command::Factorial { n } => println!("{}", factorial(n)),
        Command::Guess { secret, low, high } => {
            let mut game = match secret {
                Some(secret) => GuessGame::new(low, high, secret)?,
                None => GuessGame::random(low, high)?,
            };
            let trail = bisect(&mut game);
            for guess in &trail {
                println!("{guess}");
            }
            println!("solved in {} guesses", game.guesses());
        }
    }

    Ok(())
}
