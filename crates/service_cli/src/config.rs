//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use path_core::types::{PathError, PathKey, Shape};
use path_models::brownian::DeterministicBrownianPath;
use path_solver::{SaveAt, SolveConfig, Solver, DEFAULT_MAX_STEPS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every environment variable read by the CLI.
pub const ENV_PREFIX: &str = "LIEPATH_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid path settings: {0}")]
    Path(#[from] PathError),

    #[error("Invalid solve settings: {0}")]
    Solve(#[from] path_solver::ConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiepathConfig {
    /// Integer seed for the base key
    pub seed: u64,
    /// Hex key; takes precedence over `seed` when set
    pub key: Option<String>,
    /// Sample shape
    pub shape: Vec<usize>,
    /// Start of integration
    pub t0: f64,
    /// End of integration
    pub t1: f64,
    /// Constant step size
    pub dt0: f64,
    /// Step budget
    pub max_steps: usize,
    /// Runge-Kutta method
    #[serde(deserialize_with = "deserialize_parsed")]
    pub solver: Solver,
    /// Record every step instead of only the final state
    pub save_steps: bool,
    /// Log level
    #[serde(deserialize_with = "deserialize_parsed")]
    pub log_level: LogLevel,
}

fn deserialize_parsed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for LiepathConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            key: None,
            shape: vec![3],
            t0: 0.0,
            t1: 1.0,
            dt0: 0.05,
            max_steps: DEFAULT_MAX_STEPS,
            solver: Solver::Dopri5,
            save_steps: false,
            log_level: LogLevel::Info,
        }
    }
}

impl LiepathConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `LIEPATH_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Override fields from a variable lookup
    ///
    /// Split out from [`Self::apply_env`] so tests do not touch the process
    /// environment.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| {
            let name = format!("{}{}", ENV_PREFIX, suffix);
            lookup(&name).map(|value| (name, value))
        };

        if let Some((name, value)) = var("SEED") {
            self.seed = parse_env(&name, &value)?;
        }
        if let Some((_, value)) = var("KEY") {
            self.key = Some(value);
        }
        if let Some((_, value)) = var("SHAPE") {
            self.shape = Shape::from_str(&value)?.into();
        }
        if let Some((name, value)) = var("T0") {
            self.t0 = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("T1") {
            self.t1 = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("DT0") {
            self.dt0 = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = var("MAX_STEPS") {
            self.max_steps = parse_env(&name, &value)?;
        }
        if let Some((_, value)) = var("SOLVER") {
            self.solver = Solver::from_str(&value)?;
        }
        if let Some((name, value)) = var("SAVE_STEPS") {
            self.save_steps = parse_env(&name, &value.to_lowercase())?;
        }
        if let Some((_, value)) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(key) = &cli.key {
            self.key = Some(key.clone());
        }
        if let Some(shape) = &cli.shape {
            self.shape = Shape::from_str(shape)?.into();
        }
        if let Some(t0) = cli.t0 {
            self.t0 = t0;
        }
        if let Some(t1) = cli.t1 {
            self.t1 = t1;
        }
        if let Some(dt0) = cli.dt0 {
            self.dt0 = dt0;
        }
        if let Some(max_steps) = cli.max_steps {
            self.max_steps = max_steps;
        }
        if let Some(solver) = &cli.solver {
            self.solver = Solver::from_str(solver)?;
        }
        if cli.save_steps {
            self.save_steps = true;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Base key: the hex key when set, otherwise derived from the seed
    pub fn path_key(&self) -> Result<PathKey, PathError> {
        match &self.key {
            Some(hex) => PathKey::from_hex(hex),
            None => Ok(PathKey::from_seed(self.seed)),
        }
    }

    /// Construct the configured Brownian path
    pub fn brownian_path(&self) -> Result<DeterministicBrownianPath, PathError> {
        Ok(DeterministicBrownianPath::new(
            self.path_key()?,
            Shape::new(self.shape.clone())?,
        ))
    }

    /// Construct the configured solve parameters
    pub fn solve_config(&self) -> Result<SolveConfig, path_solver::ConfigError> {
        let save_at = if self.save_steps {
            SaveAt::Steps
        } else {
            SaveAt::Final
        };
        SolveConfig::builder()
            .t0(self.t0)
            .t1(self.t1)
            .dt0(self.dt0)
            .max_steps(self.max_steps)
            .save_at(save_at)
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.brownian_path()?;
        self.solve_config()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} could not be parsed", name, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Hex key override
    pub key: Option<String>,
    /// Shape override, comma-separated
    pub shape: Option<String>,
    /// Start time override
    pub t0: Option<f64>,
    /// End time override
    pub t1: Option<f64>,
    /// Step size override
    pub dt0: Option<f64>,
    /// Step budget override
    pub max_steps: Option<usize>,
    /// Solver override
    pub solver: Option<String>,
    /// Record every step
    pub save_steps: bool,
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
pub fn build_config(cli: &CliArgs) -> Result<LiepathConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => LiepathConfig::from_file(path)?,
        None => LiepathConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
