//! Error types for the integration engine.
//!
//! [`ConfigError`] covers invalid solve parameters and is raised when a
//! configuration is built. [`SolveError`] covers everything that can go wrong
//! once a solve starts.

use thiserror::Error;

/// Configuration error for a solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Interval endpoints are not finite or not increasing.
    #[error("Invalid interval [{t0}, {t1}]: endpoints must be finite with t0 < t1")]
    InvalidInterval {
        /// Start of integration.
        t0: f64,
        /// End of integration.
        t1: f64,
    },

    /// Step size is not finite and positive.
    #[error("Invalid step size {0}: must be finite and positive")]
    InvalidStepSize(f64),

    /// Step budget of zero.
    #[error("Invalid max steps {0}: must be at least 1")]
    InvalidMaxSteps(usize),

    /// A required builder parameter was not set.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    /// Solver name not recognised.
    #[error("Unknown solver '{0}'. Must be one of: euler, heun, dopri5")]
    UnknownSolver(String),
}

/// Runtime failures during integration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Integration interval not covered by the control.
    #[error(
        "Integration interval [{t0}, {t1}] lies outside the control domain [{lower}, {upper}]"
    )]
    OutOfDomain {
        /// Start of integration.
        t0: f64,
        /// End of integration.
        t1: f64,
        /// Lower bound of the control domain.
        lower: f64,
        /// Upper bound of the control domain.
        upper: f64,
    },

    /// Constant step size needs more steps than allowed.
    #[error("Reached maximum number of steps ({max_steps}); {required} steps required")]
    MaxStepsReached {
        /// Configured step budget.
        max_steps: usize,
        /// Steps the interval needs at the configured step size.
        required: usize,
    },

    /// Matrix shapes do not line up.
    #[error("Dimension mismatch in {context}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Where the mismatch was detected.
        context: &'static str,
        /// Expected (rows, columns).
        expected: (usize, usize),
        /// Actual (rows, columns).
        actual: (usize, usize),
    },
}
