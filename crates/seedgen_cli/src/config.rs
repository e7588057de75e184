//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use seedgen_core::AlgorithmKind;

/// Environment variable holding the integer seed.
pub const ENV_SEED: &str = "SEEDGEN_SEED";
/// Environment variable selecting the step algorithm.
pub const ENV_ALGORITHM: &str = "SEEDGEN_ALGORITHM";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "SEEDGEN_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed: {0}. Must be a signed 64-bit integer")]
    InvalidSeed(String),

    #[error("Invalid algorithm: {0}. Must be one of: pcg32, lcg64")]
    InvalidAlgorithm(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: binary, hex, decimal")]
    InvalidFormat(String),

    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(u64),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Encoding of raw words written by `seedgen stream`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Four little-endian bytes per word, for test batteries reading stdin
    #[default]
    Binary,
    /// Eight lowercase hex digits per line
    Hex,
    /// One unsigned decimal per line
    Decimal,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "bin" | "raw" => Ok(OutputFormat::Binary),
            "hex" => Ok(OutputFormat::Hex),
            "decimal" | "dec" => Ok(OutputFormat::Decimal),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Binary => write!(f, "binary"),
            OutputFormat::Hex => write!(f, "hex"),
            OutputFormat::Decimal => write!(f, "decimal"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Integer the root seed is built from
    pub seed: i64,
    /// Step algorithm
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub algorithm: AlgorithmKind,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default encoding for raw streams
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Default sample count for uniformity checks
    pub samples: u64,
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<AlgorithmKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AlgorithmKind::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            algorithm: AlgorithmKind::Pcg32,
            log_level: LogLevel::Info,
            format: OutputFormat::Binary,
            samples: 100_000,
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides fields for which `lookup` returns a value.
    ///
    /// `lookup` maps an environment variable name to its value; taking it as
    /// a closure keeps the layering testable without touching the process
    /// environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_seed(&seed)?;
        }
        if let Some(algorithm) = lookup(ENV_ALGORITHM) {
            self.algorithm = parse_algorithm(&algorithm)?;
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = parse_algorithm(algorithm)?;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

fn parse_seed(s: &str) -> Result<i64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

fn parse_algorithm(s: &str) -> Result<AlgorithmKind, ConfigError> {
    AlgorithmKind::from_str(s).map_err(|_| ConfigError::InvalidAlgorithm(s.to_string()))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<i64>,
    /// Algorithm override
    pub algorithm: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    // Override with environment variables
    config.apply_env(lookup)?;

    // Override with CLI arguments
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, 0);
        assert_eq!(config.algorithm, AlgorithmKind::Pcg32);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Binary);
        assert_eq!(config.samples, 100_000);
        assert_eq!(CliConfig::new(), config);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("binary").unwrap(), OutputFormat::Binary);
        assert_eq!(OutputFormat::from_str("raw").unwrap(), OutputFormat::Binary);
        assert_eq!(OutputFormat::from_str("HEX").unwrap(), OutputFormat::Hex);
        assert_eq!(OutputFormat::from_str("dec").unwrap(), OutputFormat::Decimal);

        assert!(OutputFormat::from_str("base64").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(format!("{}", OutputFormat::Binary), "binary");
        assert_eq!(format!("{}", OutputFormat::Hex), "hex");
        assert_eq!(format!("{}", OutputFormat::Decimal), "decimal");
    }

    #[test]
    fn test_validate_samples() {
        let mut config = CliConfig::default();
        config.samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSamples(0))
        ));

        config.samples = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            seed = -42
            algorithm = "lcg64"
            log_level = "debug"
            format = "hex"
            samples = 5000
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, -42);
        assert_eq!(config.algorithm, AlgorithmKind::Lcg64);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Hex);
        assert_eq!(config.samples, 5000);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            algorithm = "PCG"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.algorithm, AlgorithmKind::Pcg32);
        assert_eq!(config.seed, 0);
        assert_eq!(config.format, OutputFormat::Binary);
    }

    #[test]
    fn test_toml_rejects_unknown_algorithm() {
        let result: Result<CliConfig, _> = toml::from_str(r#"algorithm = "mt19937""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env_of(&[
                (ENV_SEED, " 141053960 "),
                (ENV_ALGORITHM, "lcg"),
                (ENV_LOG_LEVEL, "trace"),
            ]))
            .unwrap();

        assert_eq!(config.seed, 141_053_960);
        assert_eq!(config.algorithm, AlgorithmKind::Lcg64);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = CliConfig::default();
        assert!(matches!(
            config.apply_env(env_of(&[(ENV_SEED, "twelve")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            config.apply_env(env_of(&[(ENV_ALGORITHM, "xorshift")])),
            Err(ConfigError::InvalidAlgorithm(_))
        ));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            seed: Some(7),
            algorithm: Some("lcg64".to_string()),
            log_level: Some("debug".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.algorithm, AlgorithmKind::Lcg64);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_build_config_priority() {
        let path = std::env::temp_dir().join(format!(
            "seedgen_config_priority_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "seed = 1\nalgorithm = \"lcg64\"\nlog_level = \"error\"\nsamples = 10\n",
        )
        .unwrap();

        // File only
        let cli = CliArgs {
            config_file: Some(path.clone()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env_of(&[])).unwrap();
        assert_eq!(config.seed, 1);
        assert_eq!(config.algorithm, AlgorithmKind::Lcg64);
        assert_eq!(config.samples, 10);

        // Env beats file
        let config = build_config_with(&cli, env_of(&[(ENV_SEED, "2")])).unwrap();
        assert_eq!(config.seed, 2);
        assert_eq!(config.log_level, LogLevel::Error);

        // CLI beats env
        let cli = CliArgs {
            seed: Some(3),
            ..cli
        };
        let config = build_config_with(&cli, env_of(&[(ENV_SEED, "2")])).unwrap();
        assert_eq!(config.seed, 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/seedgen.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env_of(&[])),
            Err(ConfigError::FileError(_))
        ));
    }
}
