use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber when a log file is configured.
/// Returns whether logging was enabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(ref path) = config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level {}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_means_no_subscriber() {
        let config = AppConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            // A directory cannot be opened for appending.
            log_file: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
