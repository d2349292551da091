use anyhow::{Context, anyhow};
use extremal_core::scan::{
    DEFAULT_CHUNK_SIZE, DEFAULT_YIELD_THRESHOLD, ScanOptions, YieldMode, YieldPoint,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::loader::error::ConfigLoadError;

/// Source that produced the scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; nothing was found.
    #[default]
    Default,
    /// Path handed to the loader directly (e.g. a `--config` flag).
    Explicit(PathBuf),
    /// File named by `EXTREMAL_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON from `EXTREMAL_CONFIG_JSON`.
    EnvInline,
    /// First default candidate found under the search root.
    File(PathBuf),
}

/// Scanner tuning. Every field has a default so partial files are fine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Elements examined between cancellation polls and progress reports.
    /// Larger chunks scan faster but react to cancellation later.
    pub chunk_size: usize,
    /// Chunks strictly larger than this are followed by a cooperative
    /// yield. Raise it to yield less often.
    pub yield_threshold: usize,
    /// How the scan yields: `tokio`, `none`, or `sleep`.
    pub yield_mode: YieldMode,
    /// Timer duration used when `yield_mode = "sleep"`.
    pub sleep_yield_ms: u64,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE.get(),
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            yield_mode: YieldMode::default(),
            sleep_yield_ms: 0,
        }
    }
}

impl ScannerConfig {
    /// Reads `path`, choosing the parser from its extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read scanner config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid scanner config {}", path.display())),
            Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid scanner config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parses TOML, falling back to JSON. `origin` only labels errors.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse scanner config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parses a JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid scanner config json: {err}"))
    }

    /// Rejects a zero `chunk_size`.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.chunk_size_non_zero().map(|_| ())
    }

    /// `chunk_size` as the type the scanners take.
    pub fn chunk_size_non_zero(&self) -> Result<NonZeroUsize, ConfigLoadError> {
        NonZeroUsize::new(self.chunk_size).ok_or(ConfigLoadError::InvalidChunkSize)
    }

    /// `sleep_yield_ms` as a [`Duration`].
    pub fn sleep_yield(&self) -> Duration {
        Duration::from_millis(self.sleep_yield_ms)
    }

    /// Yield point selected by `yield_mode`.
    pub fn yield_point(&self) -> Box<dyn YieldPoint> {
        self.yield_mode.into_yield_point(self.sleep_yield())
    }

    /// Builds scan options carrying this configuration. Progress and
    /// cancellation are left for the caller to attach.
    pub fn scan_options<'o>(&self) -> Result<ScanOptions<'o>, ConfigLoadError> {
        Ok(ScanOptions::new()
            .chunk_size(self.chunk_size_non_zero()?)
            .yield_threshold(self.yield_threshold)
            .yield_with_boxed(self.yield_point()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_core_constants() {
        let config = ScannerConfig::default();
        assert_eq!(config.chunk_size, 10_000);
        assert_eq!(config.yield_threshold, 1_000);
        assert_eq!(config.yield_mode, YieldMode::Tokio);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = ScannerConfig::parse_from_str("chunk_size = 512\n", "inline").unwrap();
        assert_eq!(config.chunk_size, 512);
        assert_eq!(config.yield_threshold, 1_000);
    }

    #[test]
    fn json_fallback_when_toml_fails() {
        let config =
            ScannerConfig::parse_from_str(r#"{"yield_mode": "sleep", "sleep_yield_ms": 5}"#, "inline")
                .unwrap();
        assert_eq!(config.yield_mode, YieldMode::Sleep);
        assert_eq!(config.sleep_yield(), Duration::from_millis(5));
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = ScannerConfig::parse_from_str("chunk_size = [", "broken.cfg").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
        assert!(message.contains("broken.cfg"));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let config = ScannerConfig {
            chunk_size: 0,
            ..ScannerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigLoadError::InvalidChunkSize)));
        assert!(config.scan_options().is_err());
    }

    #[test]
    fn scan_options_carry_the_tuning() {
        let config = ScannerConfig {
            chunk_size: 64,
            yield_threshold: 16,
            ..ScannerConfig::default()
        };
        let options = config.scan_options().unwrap();
        assert_eq!(options.chunk_size_value().get(), 64);
        assert_eq!(options.yield_threshold_value(), 16);
        assert!(options.yields_between_chunks());
    }
}
