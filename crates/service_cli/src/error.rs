//! CLI error types.

use crate::config::ConfigError;
use path_core::types::PathError;
use path_solver::SolveError;
use thiserror::Error;

/// Errors surfaced to the user by the `liepath` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Path construction failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Integration failed.
    #[error("Solve failed: {0}")]
    Solve(#[from] SolveError),

    /// Command-line argument rejected after parsing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
