use std::path::PathBuf;

use crate::{constants::*, util::non_empty_var};

/// Raw configuration values taken from the process environment.
///
/// Values stay unparsed here so the loader can report which variable was
/// malformed.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// `EXTREMAL_CONFIG_PATH`
    pub config_path: Option<PathBuf>,
    /// `EXTREMAL_CONFIG_JSON`
    pub config_json: Option<String>,
    /// `EXTREMAL_CHUNK_SIZE`
    pub chunk_size: Option<String>,
    /// `EXTREMAL_YIELD_THRESHOLD`
    pub yield_threshold: Option<String>,
    /// `EXTREMAL_YIELD_MODE`
    pub yield_mode: Option<String>,
    /// `EXTREMAL_SLEEP_YIELD_MS`
    pub sleep_yield_ms: Option<String>,
}

impl EnvConfig {
    /// Reads every variable, skipping unset and blank ones.
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var(ENV_CONFIG_PATH).map(PathBuf::from),
            config_json: non_empty_var(ENV_CONFIG_JSON),
            chunk_size: non_empty_var(ENV_CHUNK_SIZE),
            yield_threshold: non_empty_var(ENV_YIELD_THRESHOLD),
            yield_mode: non_empty_var(ENV_YIELD_MODE),
            sleep_yield_ms: non_empty_var(ENV_SLEEP_YIELD_MS),
        }
    }

    /// Whether any per-field override is present.
    pub fn has_overrides(&self) -> bool {
        self.chunk_size.is_some()
            || self.yield_threshold.is_some()
            || self.yield_mode.is_some()
            || self.sleep_yield_ms.is_some()
    }
}
