//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `EVENTSTATUS_LOG_LEVEL`: Default tracing filter (required)
//! - `EVENTSTATUS_LOG_JSON`: Emit JSON log lines (true/false, default false)
//! - `EVENTSTATUS_SEED_PATH`: Fixture used to seed the in-memory repository
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./eventstatus.json` or `./eventstatus.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. The same names relative to the executable location

use std::path::{Path, PathBuf};

use eventstatus_domain::{Config, EventStatusError, LoggingConfig, RepositoryConfig, Result};

const CONFIG_FILE_NAMES: [&str; 8] = [
    "eventstatus.json",
    "eventstatus.toml",
    "config.json",
    "config.toml",
    "../config.json",
    "../config.toml",
    "../../config.json",
    "../../config.toml",
];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `EventStatusError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `EventStatusError::Config` if `EVENTSTATUS_LOG_LEVEL` is missing.
pub fn load_from_env() -> Result<Config> {
    let level = env_var("EVENTSTATUS_LOG_LEVEL")?;
    let json = env_bool("EVENTSTATUS_LOG_JSON", false);
    let seed_path = std::env::var("EVENTSTATUS_SEED_PATH").ok().filter(|p| !p.is_empty());

    Ok(Config {
        logging: LoggingConfig { level, json },
        repository: RepositoryConfig { seed_path },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `EventStatusError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EventStatusError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EventStatusError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EventStatusError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EventStatusError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EventStatusError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(EventStatusError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory first, then the executable's directory.
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        bases.push(exe_dir);
    }

    bases
        .iter()
        .flat_map(|base| CONFIG_FILE_NAMES.iter().map(move |name| base.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        EventStatusError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
