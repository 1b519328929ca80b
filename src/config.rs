//! Process-level configuration: where to log and how much.
//!
//! None of this affects navigation. The TUI owns stdout, so logging
//! always goes to a file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "RAVENCLI_LOG_LEVEL";

/// Environment variable holding the log file path.
pub const ENV_LOG_FILE: &str = "RAVENCLI_LOG_FILE";

/// Level used when nothing is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_DIR_NAME: &str = "raven";
const LOG_FILE_NAME: &str = "raven.log";

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Error while building or applying configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Level name not recognized.
    InvalidLogLevel { value: String },
    /// Log file (or its directory) could not be created.
    LogFile { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidLogLevel { value } => write!(
                f,
                "invalid log level '{}' (expected one of: off, panic, fatal, error, warn, info, debug, trace)",
                value
            ),
            ConfigError::LogFile { path, source } => {
                write!(f, "cannot open log file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLogLevel { .. } => None,
            ConfigError::LogFile { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

impl Config {
    /// Build a config, falling back to the default log location.
    pub fn new(log_level: LevelFilter, log_file: Option<PathBuf>) -> Self {
        Config {
            log_level,
            log_file: log_file.unwrap_or_else(default_log_file),
        }
    }
}

/// Parse a log level name, case-insensitively.
///
/// Accepts the usual names plus `panic`/`fatal` (treated as `error`)
/// and `warning` (treated as `warn`).
pub fn parse_log_level(value: &str) -> Result<LevelFilter, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "panic" | "fatal" | "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidLogLevel {
            value: value.to_string(),
        }),
    }
}

/// Default log file: `<cache dir>/raven/raven.log`, or `./raven.log`
/// when the platform has no cache directory.
pub fn default_log_file() -> PathBuf {
    log_file_under(dirs::cache_dir())
}

fn log_file_under(base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(dir) => dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Create (truncating) the log file, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, ConfigError> {
    let wrap = |source| ConfigError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    File::create(path).map_err(wrap)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_standard_levels() {
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_log_level("error").unwrap(), LevelFilter::Error);
        assert_eq!(parse_log_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_log_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level(" Info ").unwrap(), LevelFilter::Info);
    }

    #[test]
    fn fatal_and_panic_map_to_error() {
        assert_eq!(parse_log_level("fatal").unwrap(), LevelFilter::Error);
        assert_eq!(parse_log_level("panic").unwrap(), LevelFilter::Error);
        assert_eq!(parse_log_level("warning").unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn default_level_parses() {
        assert_eq!(parse_log_level(DEFAULT_LOG_LEVEL).unwrap(), LevelFilter::Info);
    }

    #[test]
    fn log_file_lives_in_app_dir() {
        let path = log_file_under(Some(PathBuf::from("/cache")));
        assert_eq!(path, PathBuf::from("/cache/raven/raven.log"));
    }

    #[test]
    fn log_file_falls_back_to_cwd() {
        assert_eq!(log_file_under(None), PathBuf::from("raven.log"));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = Config::new(LevelFilter::Debug, Some(PathBuf::from("/tmp/x.log")));
        assert_eq!(config.log_file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn open_log_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("raven.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_reports_path_on_failure() {
        let tmp = TempDir::new().unwrap();
        // A regular file cannot act as a parent directory
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("raven.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LogFile { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
