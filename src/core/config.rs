//! # Configuration
//!
//! Centralizes the session settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.felsius/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SymbolStyle;
use crate::core::state::SessionSettings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FelsiusConfig {
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub start_value: Option<i64>,
    pub freeze_result: Option<bool>,
    pub exit_on_result: Option<bool>,
    pub symbols: Option<SymbolStyle>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub start_value: Option<i64>,
    pub freeze_result: Option<bool>,
    pub exit_on_result: Option<bool>,
    pub symbols: Option<SymbolStyle>,
}

pub const ENV_START_VALUE: &str = "FELSIUS_START_VALUE";
pub const ENV_FREEZE_RESULT: &str = "FELSIUS_FREEZE_RESULT";
pub const ENV_EXIT_ON_RESULT: &str = "FELSIUS_EXIT_ON_RESULT";
pub const ENV_SYMBOLS: &str = "FELSIUS_SYMBOLS";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.felsius/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".felsius").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from `~/.felsius/config.toml`.
///
/// An explicit path must exist. The default path is generated with a
/// commented-out template when missing, and `FelsiusConfig::default()` is
/// returned. A file that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<FelsiusConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FelsiusConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FelsiusConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FelsiusConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FelsiusConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Felsius Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [session]
# start_value = 0             # Value shown when the input screen opens
# freeze_result = true        # Ignore up/down on the result screen (false reopens the input)
# exit_on_result = false      # Print the result and exit as soon as it is computed
# symbols = "scale"           # "scale" or "legacy-celsius"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final settings by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FelsiusConfig, cli: &CliOverrides) -> SessionSettings {
    resolve_from(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_from(
    config: &FelsiusConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> SessionSettings {
    let defaults = SessionSettings::default();
    let file = &config.session;

    let start_value = cli
        .start_value
        .or_else(|| env_parsed(&env, ENV_START_VALUE, |v| v.parse().ok()))
        .or(file.start_value)
        .unwrap_or(defaults.start_value);

    let freeze_result = cli
        .freeze_result
        .or_else(|| env_parsed(&env, ENV_FREEZE_RESULT, parse_bool))
        .or(file.freeze_result)
        .unwrap_or(defaults.freeze_result);

    let exit_on_result = cli
        .exit_on_result
        .or_else(|| env_parsed(&env, ENV_EXIT_ON_RESULT, parse_bool))
        .or(file.exit_on_result)
        .unwrap_or(defaults.exit_on_result);

    let symbols = cli
        .symbols
        .or_else(|| env_parsed(&env, ENV_SYMBOLS, parse_symbols))
        .or(file.symbols)
        .unwrap_or(defaults.symbols);

    SessionSettings {
        start_value,
        freeze_result,
        exit_on_result,
        symbols,
    }
}

/// Reads `key` and parses it, logging and ignoring values that don't parse.
fn env_parsed<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: not a valid value", key, raw);
    }
    parsed
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_symbols(value: &str) -> Option<SymbolStyle> {
    match value.to_ascii_lowercase().as_str() {
        "scale" => Some(SymbolStyle::Scale),
        "legacy-celsius" | "legacy_celsius" => Some(SymbolStyle::LegacyCelsius),
        _ => None,
    }
}
