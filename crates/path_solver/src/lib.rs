//! # path_solver: Controlled Differential Equation Integration (Layer 3)
//!
//! ## Layer 3 Role
//!
//! path_solver integrates matrix-valued equations of the form
//!
//! ```text
//! dY = f(t, Y) dX
//! ```
//!
//! where `X` is either time ([`term::OdeTerm`]) or a controlled path such as
//! a Brownian motion ([`term::ControlTerm`]).
//!
//! - [`solver::Solver`]: Euler, Heun and Dormand–Prince 5 tableaux
//! - [`config::SolveConfig`]: validated interval, step size and save policy
//! - [`solve::diffeqsolve`]: constant-step driver returning a [`solve::Solution`]
//!
//! Step sizes are constant; there is no error estimation or step rejection.
//!
//! ## Usage Example
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use path_solver::{diffeqsolve, OdeTerm, SolveConfig, Solver};
//!
//! // dy/dt = y on [0, 1]
//! let term = OdeTerm::new(|_t: f64, y: &DMatrix<f64>| y.clone());
//! let config = SolveConfig::builder().t0(0.0).t1(1.0).dt0(0.1).build().unwrap();
//!
//! let y0 = DMatrix::from_element(1, 1, 1.0);
//! let sol = diffeqsolve(&term, Solver::Dopri5, &y0, &config).unwrap();
//!
//! let y1 = sol.final_state().unwrap()[(0, 0)];
//! assert!((y1 - std::f64::consts::E).abs() < 1e-7);
//! assert_eq!(sol.stats.num_steps, 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod solve;
pub mod solver;
pub mod term;

pub use config::{SaveAt, SolveConfig, SolveConfigBuilder, DEFAULT_MAX_STEPS};
pub use error::{ConfigError, SolveError};
pub use solve::{diffeqsolve, Solution, SolveStats};
pub use solver::{ButcherTableau, Solver};
pub use term::{ControlTerm, LeftInvariantField, OdeTerm, Term, VectorField};
