use std::{fs, path::PathBuf, sync::Mutex};

use extremal_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, EnvConfig, ScannerConfig,
    constants::{ENV_CHUNK_SIZE, ENV_CONFIG_JSON, ENV_CONFIG_PATH, ENV_YIELD_MODE},
};
use extremal_core::scan::YieldMode;
use once_cell::sync::Lazy;
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn isolated_loader(root: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .without_env_file()
        .with_search_root(root.path())
}

#[test]
fn empty_root_falls_back_to_defaults() {
    let root = tempfile::tempdir().unwrap();
    let load = isolated_loader(&root)
        .load_with_env(EnvConfig::default())
        .unwrap();

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, ScannerConfig::default());
    assert!(load.overrides.is_empty());
    assert!(!load.env_file_loaded);
}

#[test]
fn default_candidates_are_discovered_in_order() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("config")).unwrap();
    fs::write(
        root.path().join("config/extremal.toml"),
        "chunk_size = 128\n",
    )
    .unwrap();

    let load = isolated_loader(&root)
        .load_with_env(EnvConfig::default())
        .unwrap();
    assert_eq!(load.config.chunk_size, 128);
    assert_eq!(
        load.source,
        ConfigSource::File(root.path().join("config/extremal.toml"))
    );

    // A root-level file shadows the nested one.
    fs::write(root.path().join("extremal.json"), r#"{"chunk_size": 64}"#).unwrap();
    let load = isolated_loader(&root)
        .load_with_env(EnvConfig::default())
        .unwrap();
    assert_eq!(load.config.chunk_size, 64);
    assert_eq!(
        load.source,
        ConfigSource::File(root.path().join("extremal.json"))
    );
}

#[test]
fn explicit_path_wins_over_environment() {
    let root = tempfile::tempdir().unwrap();
    let explicit = root.path().join("tuning.toml");
    fs::write(&explicit, "chunk_size = 7\nyield_mode = \"none\"\n").unwrap();

    let env = EnvConfig {
        config_json: Some(r#"{"chunk_size": 99}"#.into()),
        ..EnvConfig::default()
    };
    let load = isolated_loader(&root)
        .with_config_path(&explicit)
        .load_with_env(env)
        .unwrap();

    assert_eq!(load.source, ConfigSource::Explicit(explicit));
    assert_eq!(load.config.chunk_size, 7);
    assert_eq!(load.config.yield_mode, YieldMode::None);
}

#[test]
fn missing_explicit_path_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("nope.toml");
    let err = isolated_loader(&root)
        .with_config_path(&missing)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn env_path_precedes_inline_json() {
    let root = tempfile::tempdir().unwrap();
    let from_env = root.path().join("env.json");
    fs::write(&from_env, r#"{"yield_threshold": 5}"#).unwrap();

    let env = EnvConfig {
        config_path: Some(from_env.clone()),
        config_json: Some(r#"{"yield_threshold": 6}"#.into()),
        ..EnvConfig::default()
    };
    let load = isolated_loader(&root).load_with_env(env).unwrap();

    assert_eq!(load.source, ConfigSource::EnvPath(from_env));
    assert_eq!(load.config.yield_threshold, 5);
}

#[test]
fn inline_json_is_used_without_files() {
    let root = tempfile::tempdir().unwrap();
    let env = EnvConfig {
        config_json: Some(r#"{"yield_mode": "sleep", "sleep_yield_ms": 3}"#.into()),
        ..EnvConfig::default()
    };
    let load = isolated_loader(&root).load_with_env(env).unwrap();

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.yield_mode, YieldMode::Sleep);
    assert_eq!(load.config.sleep_yield_ms, 3);
}

#[test]
fn field_overrides_apply_on_top_of_files() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("extremal.toml"), "chunk_size = 128\n").unwrap();

    let env = EnvConfig {
        chunk_size: Some("256".into()),
        yield_mode: Some("off".into()),
        ..EnvConfig::default()
    };
    assert!(env.has_overrides());
    let load = isolated_loader(&root).load_with_env(env).unwrap();

    assert_eq!(load.config.chunk_size, 256);
    assert_eq!(load.config.yield_mode, YieldMode::None);
    assert_eq!(load.overrides, vec![ENV_CHUNK_SIZE, ENV_YIELD_MODE]);
}

#[test]
fn malformed_override_names_the_variable() {
    let root = tempfile::tempdir().unwrap();
    let env = EnvConfig {
        yield_mode: Some("spin".into()),
        ..EnvConfig::default()
    };
    let err = isolated_loader(&root).load_with_env(env).unwrap_err();

    assert!(matches!(
        err,
        ConfigLoadError::InvalidEnv { var, ref value } if var == ENV_YIELD_MODE && value == "spin"
    ));
}

#[test]
fn zero_chunk_size_fails_validation() {
    let root = tempfile::tempdir().unwrap();
    let env = EnvConfig {
        chunk_size: Some("0".into()),
        ..EnvConfig::default()
    };
    let err = isolated_loader(&root).load_with_env(env).unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidChunkSize));
}

#[test]
fn unparsable_file_surfaces_scanner_error() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("extremal.toml"), "chunk_size = \"many\"\n").unwrap();

    let err = isolated_loader(&root)
        .load_with_env(EnvConfig::default())
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Scanner(_)));
}

#[test]
fn load_reads_process_environment_and_env_file() {
    let _guard = env_guard();
    let root = tempfile::tempdir().unwrap();
    let env_file: PathBuf = root.path().join(".env");
    fs::write(&env_file, format!("{ENV_CHUNK_SIZE}=42\n")).unwrap();

    unsafe {
        std::env::remove_var(ENV_CHUNK_SIZE);
        std::env::remove_var(ENV_CONFIG_PATH);
        std::env::remove_var(ENV_YIELD_MODE);
        std::env::set_var(ENV_CONFIG_JSON, r#"{"yield_threshold": 11}"#);
    }

    let result = ConfigLoader::new()
        .with_env_file(&env_file)
        .with_search_root(root.path())
        .load();

    unsafe {
        std::env::remove_var(ENV_CHUNK_SIZE);
        std::env::remove_var(ENV_CONFIG_JSON);
    }

    let load = result.unwrap();
    assert!(load.env_file_loaded);
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.chunk_size, 42);
    assert_eq!(load.config.yield_threshold, 11);
}

#[test]
fn missing_env_file_is_not_an_error() {
    let _guard = env_guard();
    let root = tempfile::tempdir().unwrap();

    unsafe {
        std::env::remove_var(ENV_CHUNK_SIZE);
        std::env::remove_var(ENV_CONFIG_PATH);
        std::env::remove_var(ENV_CONFIG_JSON);
        std::env::remove_var(ENV_YIELD_MODE);
    }

    let load = ConfigLoader::new()
        .with_env_file(root.path().join("absent.env"))
        .with_search_root(root.path())
        .load()
        .unwrap();
    assert!(!load.env_file_loaded);
    assert_eq!(load.source, ConfigSource::Default);
}
