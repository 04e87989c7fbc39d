//! Solve configuration.
//!
//! This module provides configuration types and builders for constant-step
//! integration.

use crate::error::ConfigError;

/// Default step budget, matching common adaptive-solver defaults.
pub const DEFAULT_MAX_STEPS: usize = 4096;

/// Which states a solve records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SaveAt {
    /// Only the state at `t1`.
    #[default]
    Final,
    /// The initial state followed by the state after every step.
    Steps,
}

/// Constant-step solve configuration.
///
/// Immutable once built. Use [`SolveConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use path_solver::{SaveAt, SolveConfig};
///
/// let config = SolveConfig::builder()
///     .t0(0.0)
///     .t1(1.0)
///     .dt0(0.05)
///     .save_at(SaveAt::Steps)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.dt0(), 0.05);
/// assert_eq!(config.max_steps(), 4096);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolveConfig {
    /// Start of integration.
    t0: f64,
    /// End of integration.
    t1: f64,
    /// Constant step size.
    dt0: f64,
    /// Step budget.
    max_steps: usize,
    /// Save policy.
    save_at: SaveAt,
}

impl SolveConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SolveConfigBuilder {
        SolveConfigBuilder::default()
    }

    /// Returns the start of integration.
    #[inline]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the end of integration.
    #[inline]
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// Returns the constant step size.
    #[inline]
    pub fn dt0(&self) -> f64 {
        self.dt0
    }

    /// Returns the step budget.
    #[inline]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the save policy.
    #[inline]
    pub fn save_at(&self) -> SaveAt {
        self.save_at
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - either endpoint is not finite, or `t0 >= t1`
    /// - `dt0` is not finite and positive
    /// - `max_steps` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.t0.is_finite() || !self.t1.is_finite() || self.t0 >= self.t1 {
            return Err(ConfigError::InvalidInterval {
                t0: self.t0,
                t1: self.t1,
            });
        }
        if !self.dt0.is_finite() || self.dt0 <= 0.0 {
            return Err(ConfigError::InvalidStepSize(self.dt0));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidMaxSteps(self.max_steps));
        }
        Ok(())
    }
}

/// Builder for [`SolveConfig`].
///
/// `t0` defaults to 0, `max_steps` to [`DEFAULT_MAX_STEPS`] and `save_at` to
/// [`SaveAt::Final`]. `t1` and `dt0` are required.
#[derive(Clone, Debug, Default)]
pub struct SolveConfigBuilder {
    t0: Option<f64>,
    t1: Option<f64>,
    dt0: Option<f64>,
    max_steps: Option<usize>,
    save_at: SaveAt,
}

impl SolveConfigBuilder {
    /// Sets the start of integration.
    #[inline]
    pub fn t0(mut self, t0: f64) -> Self {
        self.t0 = Some(t0);
        self
    }

    /// Sets the end of integration.
    #[inline]
    pub fn t1(mut self, t1: f64) -> Self {
        self.t1 = Some(t1);
        self
    }

    /// Sets the constant step size.
    #[inline]
    pub fn dt0(mut self, dt0: f64) -> Self {
        self.dt0 = Some(dt0);
        self
    }

    /// Sets the step budget.
    #[inline]
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Sets the save policy.
    #[inline]
    pub fn save_at(mut self, save_at: SaveAt) -> Self {
        self.save_at = save_at;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingParameter` if `t1` or `dt0` was not set,
    /// or any error from [`SolveConfig::validate`].
    pub fn build(self) -> Result<SolveConfig, ConfigError> {
        let config = SolveConfig {
            t0: self.t0.unwrap_or(0.0),
            t1: self.t1.ok_or(ConfigError::MissingParameter("t1"))?,
            dt0: self.dt0.ok_or(ConfigError::MissingParameter("dt0"))?,
            max_steps: self.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
            save_at: self.save_at,
        };
        config.validate()?;
        Ok(config)
    }
}
