use crate::model::{DisplayMode, IconStyle};
use clap::Parser;
use config::{Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_TICK_RATE_MS: u64 = 50;
const DEFAULT_AMBIENT: bool = true;
const DEFAULT_AMBIENT_ORBS: usize = 3;
const DEFAULT_LOG_LEVEL: &str = "info";
const MAX_AMBIENT_ORBS: usize = 12;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Layered sources deserialize into this; every field is optional so that
// a later layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    tick_rate_ms: Option<u64>,
    ambient: Option<bool>,
    ambient_orbs: Option<usize>,
    icons: Option<IconStyle>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Redraw interval, drives the ambient animation.
    pub tick_rate_ms: u64,
    pub ambient: bool,
    pub ambient_orbs: usize,
    pub icons: IconStyle,
    /// Logs go here. Without a file nothing is logged, the terminal belongs
    /// to the UI.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            ambient: DEFAULT_AMBIENT,
            ambient_orbs: DEFAULT_AMBIENT_ORBS,
            icons: IconStyle::default(),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Number of orbs to generate, zero when the ambient background is off.
    pub fn orb_count(&self) -> usize {
        if self.ambient {
            self.ambient_orbs
        } else {
            0
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "A terminal portfolio page", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub tick_rate_ms: Option<u64>,
    #[arg(long)]
    pub ambient: Option<bool>,
    #[arg(long)]
    pub ambient_orbs: Option<usize>,
    #[arg(long, value_enum)]
    pub icons: Option<IconStyle>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the page as plain text and exit
    #[arg(long)]
    pub print: bool,

    /// Display mode used by --print
    #[arg(long, value_enum, default_value_t = DisplayMode::Light, requires = "print")]
    pub mode: DisplayMode,

    /// Print the merged configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads defaults, then the config file, then `FOLIO__*` environment
/// variables, then command line flags.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_map: Map<String, Value> = Environment::with_prefix("FOLIO")
        .separator("__")
        .collect()
        .unwrap_or_else(|_| Map::new());

    let config_file_path = args.config.clone().or_else(default_config_path);
    build_config(args, config_file_path.as_deref(), Some(env_map))
}

fn build_config(
    args: &CliArgs,
    config_file_path: Option<&Path>,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigCrate::builder();
    if let Some(path) = config_file_path {
        // An explicitly named file must exist, the default one may not.
        builder = builder.add_source(File::from(path).required(args.config.is_some()));
    }
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;

    let config = AppConfig {
        tick_rate_ms: args
            .tick_rate_ms
            .or(loaded.tick_rate_ms)
            .unwrap_or(DEFAULT_TICK_RATE_MS),
        ambient: args.ambient.or(loaded.ambient).unwrap_or(DEFAULT_AMBIENT),
        ambient_orbs: args
            .ambient_orbs
            .or(loaded.ambient_orbs)
            .unwrap_or(DEFAULT_AMBIENT_ORBS),
        icons: args.icons.or(loaded.icons).unwrap_or_default(),
        log_file: args.log_file.clone().or(loaded.log_file),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tick_rate_ms == 0 {
        return Err(ConfigError::ValidationError(
            "tick_rate_ms must be at least 1".to_string(),
        ));
    }
    if config.ambient_orbs > MAX_AMBIENT_ORBS {
        return Err(ConfigError::ValidationError(format!(
            "ambient_orbs must be at most {}",
            MAX_AMBIENT_ORBS
        )));
    }
    if tracing_subscriber::EnvFilter::try_new(&config.log_level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "invalid log_level filter: {}",
            config.log_level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ValueKind;
    use std::io::Write;

    fn test_args(extra: &[&str]) -> CliArgs {
        let mut cmd = vec!["folio"];
        cmd.extend_from_slice(extra);
        CliArgs::try_parse_from(cmd).expect("Failed to parse test args")
    }

    #[test]
    fn test_default_config() {
        let config = build_config(&test_args(&[]), None, None).expect("Failed to load default config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.orb_count(), DEFAULT_AMBIENT_ORBS);
    }

    #[test]
    fn test_env_override() {
        let mut override_map = Map::new();
        override_map.insert(
            "tick_rate_ms".to_string(),
            Value::new(None, ValueKind::U64(100)),
        );
        override_map.insert(
            "icons".to_string(),
            Value::new(None, ValueKind::String("ascii".to_string())),
        );

        let config = build_config(&test_args(&[]), None, Some(override_map))
            .expect("Failed to load config with simulated env");

        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.icons, IconStyle::Ascii);
        assert_eq!(
            config.ambient_orbs, DEFAULT_AMBIENT_ORBS,
            "Env override affected unrelated default"
        );
    }

    #[test]
    fn test_arg_override_beats_env() {
        let mut override_map = Map::new();
        override_map.insert(
            "tick_rate_ms".to_string(),
            Value::new(None, ValueKind::U64(100)),
        );
        let args = test_args(&["--tick-rate-ms=16", "--ambient=false", "--icons=none"]);
        let config =
            build_config(&args, None, Some(override_map)).expect("Failed to build config from args");

        assert_eq!(config.tick_rate_ms, 16);
        assert!(!config.ambient);
        assert_eq!(config.orb_count(), 0);
        assert_eq!(config.icons, IconStyle::None);
    }

    #[test]
    fn test_config_file_layer() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config");
        writeln!(file, "ambient_orbs = 5\nicons = \"ascii\"\nlog_level = \"debug\"").unwrap();

        let args = test_args(&[]);
        let config = build_config(&args, Some(file.path()), None).expect("Failed to load config file");
        assert_eq!(config.ambient_orbs, 5);
        assert_eq!(config.icons, IconStyle::Ascii);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        let args = test_args(&[]);
        let path = Path::new("/nonexistent/folio/config.toml");
        assert!(build_config(&args, Some(path), None).is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let args = test_args(&["--config", "/nonexistent/folio.toml"]);
        let result = build_config(&args, args.config.as_deref(), None);
        assert!(matches!(result, Err(ConfigError::ConfigFile(_))));
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let args = test_args(&["--tick-rate-ms=0"]);
        assert!(matches!(
            build_config(&args, None, None),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_too_many_orbs() {
        let args = test_args(&["--ambient-orbs=40"]);
        assert!(matches!(
            build_config(&args, None, None),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_mode_requires_print() {
        assert!(CliArgs::try_parse_from(["folio", "--mode", "dark"]).is_err());
        let args = test_args(&["--print", "--mode", "dark"]);
        assert_eq!(args.mode, DisplayMode::Dark);
        assert_eq!(test_args(&["--print"]).mode, DisplayMode::Light);
    }
}
