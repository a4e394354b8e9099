//! Runtime settings read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `MRO_FORECAST_LOG_MODE` | `auto`, `file` or `stdout` | `auto` |
//! | `MRO_FORECAST_LOG_FILE` | log file path | `mro_forecast.log` |
//! | `MRO_FORECAST_COEFFICIENTS` | JSON coefficient table | built-in fit |
//!
//! Log filtering itself uses `RUST_LOG` through `tracing_subscriber::EnvFilter`.

use std::path::PathBuf;

pub const LOG_MODE_ENV: &str = "MRO_FORECAST_LOG_MODE";
pub const LOG_FILE_ENV: &str = "MRO_FORECAST_LOG_FILE";
pub const COEFFICIENTS_ENV: &str = "MRO_FORECAST_COEFFICIENTS";

const DEFAULT_LOG_FILE: &str = "mro_forecast.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Whether to log to a file given the terminal state.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Settings for the binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    /// Alternative coefficient table; `None` selects the built-in fit
    pub coefficients_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_mode: LogMode::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            coefficients_path: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            log_mode: non_empty(LOG_MODE_ENV)
                .map(|v| LogMode::parse(&v))
                .unwrap_or_default(),
            log_file: non_empty(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            coefficients_path: non_empty(COEFFICIENTS_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert!(settings.log_mode.use_file(true));
        assert!(!settings.log_mode.use_file(false));
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            (LOG_MODE_ENV, "STDOUT"),
            (LOG_FILE_ENV, "/tmp/mro.log"),
            (COEFFICIENTS_ENV, "models/coefficients.json"),
        ]);
        assert_eq!(settings.log_mode, LogMode::Stdout);
        assert!(!settings.log_mode.use_file(true));
        assert_eq!(settings.log_file, PathBuf::from("/tmp/mro.log"));
        assert_eq!(
            settings.coefficients_path,
            Some(PathBuf::from("models/coefficients.json"))
        );
    }

    #[test]
    fn test_blank_values_ignored() {
        let settings = settings_from(&[(COEFFICIENTS_ENV, "  "), (LOG_MODE_ENV, "bogus")]);
        assert_eq!(settings.coefficients_path, None);
        assert_eq!(settings.log_mode, LogMode::Auto);
    }
}
