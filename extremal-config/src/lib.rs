//! Shared configuration library for extremal.
//!
//! Scanner tuning (chunk size, yield threshold, yield strategy) can come from
//! a TOML/JSON file, inline JSON in the environment, individual environment
//! overrides, or the built-in defaults. [`ConfigLoader`] resolves those layers
//! in a fixed order and hands back a validated [`ScannerConfig`] together with
//! where it came from.

pub mod constants;
/// Layered loader and its error type
pub mod loader;
/// Serde models for configuration files
pub mod models;
/// Raw environment snapshot
pub mod sources;
/// Environment parsing helpers
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::scanner::{ConfigSource, ScannerConfig};
pub use sources::EnvConfig;
