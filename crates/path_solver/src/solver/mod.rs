//! Explicit Runge–Kutta solvers.
//!
//! Solvers form a closed set, so they are an enum with static dispatch
//! rather than a trait object hierarchy.

mod tableau;

pub use tableau::ButcherTableau;

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Explicit Runge–Kutta method used for every step.
///
/// # Examples
///
/// ```rust
/// use path_solver::Solver;
///
/// let solver: Solver = "Dopri5".parse().unwrap();
/// assert_eq!(solver, Solver::Dopri5);
/// assert_eq!(solver.order(), 5);
/// assert_eq!(solver.tableau().stages(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Solver {
    /// Forward Euler, order 1.
    Euler,
    /// Heun's method (explicit trapezoidal), order 2.
    Heun,
    /// Dormand–Prince 5(4), propagating the fifth-order solution.
    #[default]
    Dopri5,
}

impl Solver {
    /// Returns the Butcher tableau of this method.
    pub fn tableau(&self) -> &'static ButcherTableau {
        match self {
            Solver::Euler => &tableau::EULER,
            Solver::Heun => &tableau::HEUN,
            Solver::Dopri5 => &tableau::DOPRI5,
        }
    }

    /// Classical order of accuracy for ordinary differential equations.
    pub fn order(&self) -> u32 {
        match self {
            Solver::Euler => 1,
            Solver::Heun => 2,
            Solver::Dopri5 => 5,
        }
    }

    /// Lowercase identifier used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Euler => "euler",
            Solver::Heun => "heun",
            Solver::Dopri5 => "dopri5",
        }
    }
}

impl FromStr for Solver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euler" => Ok(Solver::Euler),
            "heun" => Ok(Solver::Heun),
            "dopri5" | "dormand-prince" => Ok(Solver::Dopri5),
            _ => Err(ConfigError::UnknownSolver(s.to_string())),
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
