//! Suspension points a chunked scan awaits between chunks.
//!
//! Keeping the yield behind a trait lets the same scan loop run on a
//! multi-threaded tokio runtime, a single-threaded executor, or with no
//! suspension at all.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Awaited by the scan loop after each chunk that exceeds the yield
/// threshold.
#[async_trait]
pub trait YieldPoint: Send + Sync {
    /// Relinquish control so other work scheduled on the same thread can run.
    async fn yield_now(&self);
}

/// Reschedules the current task through [`tokio::task::yield_now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioYield;

#[async_trait]
impl YieldPoint for TokioYield {
    async fn yield_now(&self) {
        tokio::task::yield_now().await;
    }
}

/// Never suspends. Used by blocking callers and deterministic tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoYield;

#[async_trait]
impl YieldPoint for NoYield {
    async fn yield_now(&self) {}
}

/// Parks the task on a timer, giving timers and I/O a chance to fire.
/// Requires a tokio runtime with the time driver enabled.
#[derive(Clone, Copy, Debug)]
pub struct SleepYield(pub Duration);

impl Default for SleepYield {
    fn default() -> Self {
        Self(Duration::ZERO)
    }
}

#[async_trait]
impl YieldPoint for SleepYield {
    async fn yield_now(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Serializable selector for the built-in yield points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldMode {
    /// [`TokioYield`].
    #[default]
    Tokio,
    /// [`NoYield`].
    None,
    /// [`SleepYield`] with the configured duration.
    Sleep,
}

impl YieldMode {
    /// Builds the yield point for this mode; `sleep` only applies to
    /// [`YieldMode::Sleep`].
    pub fn into_yield_point(self, sleep: Duration) -> Box<dyn YieldPoint> {
        match self {
            YieldMode::Tokio => Box::new(TokioYield),
            YieldMode::None => Box::new(NoYield),
            YieldMode::Sleep => Box::new(SleepYield(sleep)),
        }
    }
}

impl std::str::FromStr for YieldMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tokio" | "yield" => Ok(YieldMode::Tokio),
            "none" | "off" => Ok(YieldMode::None),
            "sleep" | "timer" => Ok(YieldMode::Sleep),
            other => Err(format!("unknown yield mode '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yield_mode_parses_aliases() {
        assert_eq!("Tokio".parse::<YieldMode>(), Ok(YieldMode::Tokio));
        assert_eq!("off".parse::<YieldMode>(), Ok(YieldMode::None));
        assert_eq!("timer".parse::<YieldMode>(), Ok(YieldMode::Sleep));
        assert!("spin".parse::<YieldMode>().is_err());
    }

    #[tokio::test]
    async fn sleep_yield_completes() {
        let point = YieldMode::Sleep.into_yield_point(Duration::from_millis(1));
        point.yield_now().await;
    }

    #[test]
    fn no_yield_runs_without_runtime() {
        futures::executor::block_on(NoYield.yield_now());
    }
}
