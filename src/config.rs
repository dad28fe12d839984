//! Runtime configuration from environment variables.
//!
//! Resolved once at startup. Invalid values fall back to defaults; the
//! problems are kept in `warnings` so they can be logged once the subscriber
//! is installed.

use std::path::PathBuf;
use std::time::Duration;

const LOG_MODE_ENV: &str = "HEARTCHECK_LOG_MODE";
const LOG_FILE_ENV: &str = "HEARTCHECK_LOG_FILE";
const SANITIZE_MAX_BYTES_ENV: &str = "HEARTCHECK_SANITIZE_MAX_BYTES";
const TICK_MS_ENV: &str = "HEARTCHECK_TICK_MS";

const DEFAULT_LOG_FILE: &str = "heartcheck.log";
pub const DEFAULT_SANITIZE_MAX_BYTES: usize = 16 * 1024;
const DEFAULT_TICK_MS: u64 = 50;
const TICK_MS_RANGE: std::ops::RangeInclusive<u64> = 10..=1000;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when attached to a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Whether to log to a file given the terminal state.
    ///
    /// Writing logs to the terminal would corrupt the TUI's alternate screen.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

impl std::str::FromStr for LogMode {
    type Err = crate::HeartcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stdout" => Ok(Self::Stdout),
            other => Err(crate::HeartcheckError::Config(format!(
                "{LOG_MODE_ENV}: unknown mode '{other}' (expected auto, file or stdout)"
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub sanitize_max_bytes: usize,
    pub tick: Duration,
    /// Problems found while reading the environment
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            sanitize_max_bytes: DEFAULT_SANITIZE_MAX_BYTES,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_MODE_ENV) {
            match raw.parse::<LogMode>() {
                Ok(mode) => config.log_mode = mode,
                Err(e) => config.warnings.push(e.to_string()),
            }
        }

        if let Some(raw) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_file = PathBuf::from(raw);
        }

        if let Some(raw) = lookup(SANITIZE_MAX_BYTES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(v) if v > 0 => config.sanitize_max_bytes = v,
                _ => config.warnings.push(format!(
                    "{SANITIZE_MAX_BYTES_ENV}: expected a positive integer, got '{raw}'"
                )),
            }
        }

        if let Some(raw) = lookup(TICK_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(v) if TICK_MS_RANGE.contains(&v) => config.tick = Duration::from_millis(v),
                _ => config.warnings.push(format!(
                    "{TICK_MS_ENV}: expected {}-{} milliseconds, got '{raw}'",
                    TICK_MS_RANGE.start(),
                    TICK_MS_RANGE.end()
                )),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.log_file, PathBuf::from("heartcheck.log"));
        assert_eq!(config.sanitize_max_bytes, DEFAULT_SANITIZE_MAX_BYTES);
        assert_eq!(config.tick, Duration::from_millis(50));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HEARTCHECK_LOG_MODE", "STDOUT"),
            ("HEARTCHECK_LOG_FILE", "/tmp/hc.log"),
            ("HEARTCHECK_SANITIZE_MAX_BYTES", "4096"),
            ("HEARTCHECK_TICK_MS", "100"),
        ]);
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("/tmp/hc.log"));
        assert_eq!(config.sanitize_max_bytes, 4096);
        assert_eq!(config.tick, Duration::from_millis(100));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("HEARTCHECK_LOG_MODE", "syslog"),
            ("HEARTCHECK_SANITIZE_MAX_BYTES", "0"),
            ("HEARTCHECK_TICK_MS", "5"),
        ]);
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.sanitize_max_bytes, DEFAULT_SANITIZE_MAX_BYTES);
        assert_eq!(config.tick, Duration::from_millis(50));
        assert_eq!(config.warnings.len(), 3);
    }

    #[test]
    fn test_log_mode_use_file() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }
}
