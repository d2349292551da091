pub mod error;

use std::path::{Path, PathBuf};

use extremal_core::scan::YieldMode;
use tracing::{debug, info};

use crate::{
    constants::{
        DEFAULT_CONFIG_CANDIDATES, ENV_CHUNK_SIZE, ENV_SLEEP_YIELD_MS, ENV_YIELD_MODE,
        ENV_YIELD_THRESHOLD,
    },
    models::scanner::{ConfigSource, ScannerConfig},
    sources::EnvConfig,
    util::parse_env_value,
};
use error::ConfigLoadError;

/// Knobs for [`ConfigLoader`].
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Explicit config file; must exist when set.
    pub config_path: Option<PathBuf>,
    /// `.env` file to load instead of searching for one.
    pub env_file: Option<PathBuf>,
    /// Skip `.env` loading entirely.
    pub skip_env_file: bool,
    /// Directory the default candidates are resolved against. Defaults to
    /// the working directory.
    pub search_root: Option<PathBuf>,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// Validated configuration.
    pub config: ScannerConfig,
    /// Layer the file values came from.
    pub source: ConfigSource,
    /// Whether a `.env` file was read.
    pub env_file_loaded: bool,
    /// Environment variables that overrode file or default values.
    pub overrides: Vec<&'static str>,
}

/// Resolves scanner configuration in this order:
///
/// 1. the explicit `config_path` option,
/// 2. `$EXTREMAL_CONFIG_PATH` (TOML or JSON file),
/// 3. `$EXTREMAL_CONFIG_JSON` (inline JSON),
/// 4. the first existing default candidate (`extremal.toml`, ...),
/// 5. built-in defaults,
///
/// then applies per-field environment overrides and validates the result.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    /// Loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with explicit options.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Uses `path` ahead of every other source.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Reads this `.env` file instead of searching for one.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Skips `.env` loading.
    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    /// Directory the default candidates are resolved against.
    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Loads `.env`, snapshots the environment and resolves every layer.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Same as [`ConfigLoader::load`] but with a caller-supplied environment
    /// snapshot and no `.env` handling.
    pub fn load_with_env(&self, env: EnvConfig) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_file_layer(&env)?;
        let overrides = if env.has_overrides() {
            apply_env_overrides(&mut config, &env)?
        } else {
            Vec::new()
        };
        config.validate()?;

        match &source {
            ConfigSource::Default => debug!("using default scanner configuration"),
            ConfigSource::EnvInline => info!("loaded scanner configuration from environment"),
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => {
                info!(path = %path.display(), "loaded scanner configuration")
            }
        }
        if !overrides.is_empty() {
            debug!(?overrides, "applied environment overrides");
        }

        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded: false,
            overrides,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        loaded.or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(ConfigLoadError::EnvFile(err)),
        })
    }

    fn load_file_layer(
        &self,
        env: &EnvConfig,
    ) -> Result<(ScannerConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = ScannerConfig::load_from_file(path).map_err(ConfigLoadError::Scanner)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            if !path.exists() {
                return Err(ConfigLoadError::MissingConfig { path: path.clone() });
            }
            let config = ScannerConfig::load_from_file(path).map_err(ConfigLoadError::Scanner)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = ScannerConfig::parse_json(raw).map_err(ConfigLoadError::Scanner)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = ScannerConfig::load_from_file(&path).map_err(ConfigLoadError::Scanner)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((ScannerConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self.options.search_root.as_deref().unwrap_or(Path::new("."));
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

fn apply_env_overrides(
    config: &mut ScannerConfig,
    env: &EnvConfig,
) -> Result<Vec<&'static str>, ConfigLoadError> {
    let mut applied = Vec::new();

    if let Some(chunk_size) = parse_env_value::<usize>(ENV_CHUNK_SIZE, env.chunk_size.as_deref())? {
        config.chunk_size = chunk_size;
        applied.push(ENV_CHUNK_SIZE);
    }
    if let Some(threshold) =
        parse_env_value::<usize>(ENV_YIELD_THRESHOLD, env.yield_threshold.as_deref())?
    {
        config.yield_threshold = threshold;
        applied.push(ENV_YIELD_THRESHOLD);
    }
    if let Some(mode) = parse_env_value::<YieldMode>(ENV_YIELD_MODE, env.yield_mode.as_deref())? {
        config.yield_mode = mode;
        applied.push(ENV_YIELD_MODE);
    }
    if let Some(ms) = parse_env_value::<u64>(ENV_SLEEP_YIELD_MS, env.sleep_yield_ms.as_deref())? {
        config.sleep_yield_ms = ms;
        applied.push(ENV_SLEEP_YIELD_MS);
    }

    Ok(applied)
}
