use std::{num::NonZeroUsize, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Args as ClapArgs, ValueEnum};
use extremal_config::{ConfigLoader, ScannerConfig};
use extremal_core::scan::{self, Direction, ScanOptions, ScanProgress};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::input::{parse_numbers, read_source};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScanDirection {
    Min,
    Max,
    /// Both extrema in one pass.
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RunningDirection {
    Min,
    Max,
}

impl From<RunningDirection> for Direction {
    fn from(direction: RunningDirection) -> Self {
        match direction {
            RunningDirection::Min => Direction::Min,
            RunningDirection::Max => Direction::Max,
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// File of whitespace or comma separated numbers; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = ScanDirection::Max)]
    pub direction: ScanDirection,

    /// Elements per chunk (overrides config)
    #[arg(long)]
    pub chunk_size: Option<NonZeroUsize>,

    /// Yield to the runtime after chunks larger than this (overrides config)
    #[arg(long)]
    pub yield_threshold: Option<usize>,

    /// Cancel the scan after this long, e.g. `500ms` or `2s`
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Report progress on stderr after every chunk
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunningArgs {
    /// File of whitespace or comma separated numbers; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = RunningDirection::Max)]
    pub direction: RunningDirection,
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<ScannerConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load scanner configuration")?;
    if load.env_file_loaded {
        info!("loaded .env file");
    }
    debug!(source = ?load.source, config = ?load.config, "scanner configuration resolved");
    Ok(load.config)
}

/// Cancels `token` on Ctrl-C or once `timeout` elapses. Exits quietly when
/// the token is cancelled by someone else first.
fn spawn_cancel_watcher(token: CancellationToken, timeout: Option<Duration>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let deadline = async {
            match timeout {
                Some(after) => tokio::time::sleep(after).await,
                None => std::future::pending().await,
            }
        };
        let interrupt = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = token.cancelled() => {}
            _ = interrupt => {
                warn!("interrupt received, cancelling scan");
                token.cancel();
            }
            _ = deadline => {
                warn!(?timeout, "timeout elapsed, cancelling scan");
                token.cancel();
            }
        }
    })
}

fn build_options<'o>(
    config: &ScannerConfig,
    args: &ScanArgs,
    token: CancellationToken,
) -> anyhow::Result<ScanOptions<'o>> {
    let mut options = config.scan_options()?.cancel_with(token);
    if let Some(chunk_size) = args.chunk_size {
        options = options.chunk_size(chunk_size);
    }
    if let Some(threshold) = args.yield_threshold {
        options = options.yield_threshold(threshold);
    }
    if args.progress {
        options = options.on_progress(|progress: ScanProgress| {
            eprintln!(
                "scanned {}/{} ({:.1}%)",
                progress.processed,
                progress.total,
                progress.percent()
            );
        });
    }
    Ok(options)
}

/// Labels aborts so a cancelled scan reads differently from a failed one.
fn finish_scan<T>(result: extremal_core::Result<T>) -> anyhow::Result<T> {
    result.map_err(|err| {
        if err.is_aborted() {
            anyhow::Error::new(err).context("scan cancelled before completion")
        } else {
            err.into()
        }
    })
}

pub async fn run_scan(args: ScanArgs, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let raw = read_source(args.file.as_deref()).await?;
    let values = parse_numbers(&raw)?;

    let token = CancellationToken::new();
    let watcher = spawn_cancel_watcher(token.clone(), args.timeout);
    let options = build_options(&config, &args, token.clone())?;

    let output = match args.direction {
        ScanDirection::Min | ScanDirection::Max => {
            let direction = if args.direction == ScanDirection::Min {
                Direction::Min
            } else {
                Direction::Max
            };
            let result = scan::scan_extremum(&values, direction, options).await;
            token.cancel();
            let result = finish_scan(result)?;
            if args.json {
                serde_json::to_string(&result)?
            } else {
                format!("{direction}: {result}")
            }
        }
        ScanDirection::Both => {
            let result = scan::scan_min_max(&values, options).await;
            token.cancel();
            let result = finish_scan(result)?;
            if args.json {
                serde_json::to_string(&result)?
            } else {
                format!("min: {}\nmax: {}", result.min, result.max)
            }
        }
    };

    let _ = watcher.await;
    println!("{output}");
    Ok(())
}

pub async fn run_running(args: RunningArgs) -> anyhow::Result<()> {
    let raw = read_source(args.file.as_deref()).await?;
    let values = parse_numbers(&raw)?;

    let mut running = scan::running_extremum(values, args.direction.into())?;
    for best in running.by_ref() {
        println!("{best}");
    }
    debug!(best = %running.best(), "running scan complete");
    Ok(())
}
