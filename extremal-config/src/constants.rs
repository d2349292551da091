//! Environment variable names and default file locations.

/// Path to a TOML or JSON config file.
pub const ENV_CONFIG_PATH: &str = "EXTREMAL_CONFIG_PATH";
/// Inline JSON configuration.
pub const ENV_CONFIG_JSON: &str = "EXTREMAL_CONFIG_JSON";
/// Overrides `chunk_size`.
pub const ENV_CHUNK_SIZE: &str = "EXTREMAL_CHUNK_SIZE";
/// Overrides `yield_threshold`.
pub const ENV_YIELD_THRESHOLD: &str = "EXTREMAL_YIELD_THRESHOLD";
/// Overrides `yield_mode` (`tokio`, `none`, `sleep`).
pub const ENV_YIELD_MODE: &str = "EXTREMAL_YIELD_MODE";
/// Overrides `sleep_yield_ms`.
pub const ENV_SLEEP_YIELD_MS: &str = "EXTREMAL_SLEEP_YIELD_MS";

/// Searched in order, relative to the loader's search root.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "extremal.toml",
    "extremal.json",
    "config/extremal.toml",
    "config/extremal.json",
];
