//! Checker configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable                  | Default                      |
//! |---------------------------|------------------------------|
//! | `PERSISTENCE_CONFIG_PATH` | `config/persistence.json`    |
//! | `PRINT_RESOLVED`          | `true`                       |
//! | `LOG_FORMAT`              | `text` (or `json`, any case) |

use std::path::PathBuf;

/// Default location of the persistence configuration document.
pub const DEFAULT_CONFIG_PATH: &str = "config/persistence.json";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings of the `persistence-config` checker binary.
///
/// Loaded once at startup via [`CheckerConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Path of the persistence configuration document to check.
    pub config_path: PathBuf,

    /// Whether to print the resolved configuration to stdout.
    pub print_resolved: bool,

    /// Log output format.
    pub log_format: LogFormat,
}

impl CheckerConfig {
    /// Loads settings from environment variables.
    ///
    /// Falls back to defaults when a variable is missing or unparseable.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config_path = lookup("PERSISTENCE_CONFIG_PATH")
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
            .into();
        let print_resolved = parse_bool(lookup("PRINT_RESOLVED").as_deref(), true);
        let log_format = match lookup("LOG_FORMAT")
            .map(|format| format.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            config_path,
            print_resolved,
            log_format,
        }
    }
}

/// Parses a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
