//! Configuration for the `qsteiner` binary.
//!
//! Precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`QSTEINER_` prefix)
//! 3. Configuration file (YAML)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use qsteiner_grover::SearchConfig;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Search parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl CliConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// File (or defaults), then environment overrides, then validation.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply `QSTEINER_*` overrides read through `lookup`.
    ///
    /// Variables that are absent leave the field unchanged; variables that
    /// are present but unparseable are an error.
    pub fn merge_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QSTEINER_SHOTS") {
            self.search.shots = parse_var("QSTEINER_SHOTS", &v)?;
        }
        if let Some(v) = lookup("QSTEINER_ITERATIONS") {
            self.search.iterations = parse_var("QSTEINER_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("QSTEINER_SEED") {
            self.search.seed = Some(parse_var("QSTEINER_SEED", &v)?);
        }
        if let Some(v) = lookup("QSTEINER_MAX_QUBITS") {
            self.search.max_qubits = parse_var("QSTEINER_MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("QSTEINER_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QSTEINER_LOG_FORMAT") {
            self.logging.format = v;
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        self.search
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Whether JSON log output was requested.
    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value '{value}' for {var}")]
    EnvError { var: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use qsteiner_grover::Iterations;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.search.shots, 1024);
        assert_eq!(config.search.iterations, Iterations::Fixed(1));
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "search:\n  shots: 256\n  iterations: optimal\n  seed: 9\nlogging:\n  format: json"
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.search.shots, 256);
        assert_eq!(config.search.iterations, Iterations::Optimal);
        assert_eq!(config.search.seed, Some(9));
        assert_eq!(config.search.max_qubits, 20);
        assert_eq!(config.logging.level, "warn");
        assert!(config.json_logs());
    }

    #[test]
    fn test_env_overrides_file() {
        let config = CliConfig::default()
            .merge_vars(vars(&[
                ("QSTEINER_SHOTS", "64"),
                ("QSTEINER_ITERATIONS", "3"),
                ("QSTEINER_SEED", "42"),
                ("QSTEINER_LOG_LEVEL", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.search.shots, 64);
        assert_eq!(config.search.iterations, Iterations::Fixed(3));
        assert_eq!(config.search.seed, Some(42));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_env_unparseable() {
        let result = CliConfig::default().merge_vars(vars(&[("QSTEINER_SHOTS", "many")]));
        assert!(matches!(result, Err(ConfigError::EnvError { .. })));
    }

    #[test]
    fn test_env_register_limit_is_capped() {
        let config = CliConfig::default()
            .merge_vars(vars(&[("QSTEINER_MAX_QUBITS", "100")]))
            .unwrap();
        assert_eq!(config.search.max_qubits, 100);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CliConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.search.shots = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file("/nonexistent/qsteiner.yaml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
