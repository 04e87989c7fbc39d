//! # path_models: Deterministic Brownian Paths (Layer 2)
//!
//! ## Layer 2 Role
//!
//! path_models builds on path_core and provides the driving signals that
//! integrators consume:
//! - A keyed pseudo-random generator ([`rng::PathRng`])
//! - The stateless, unbounded [`brownian::DeterministicBrownianPath`]
//! - A diagonal matrix embedding for matrix-valued controls
//!   ([`brownian::DiagonalLift`])
//!
//! ## Usage Example
//!
//! ```rust
//! use path_core::traits::ControlledPath;
//! use path_core::types::{PathKey, Shape};
//! use path_models::brownian::DeterministicBrownianPath;
//!
//! let path = DeterministicBrownianPath::new(PathKey::from_seed(0), Shape::vector(3).unwrap());
//!
//! let w0 = path.evaluate(0.0, None, true);
//! let w1 = path.evaluate(1.0, None, true);
//! assert_eq!(path.evaluate(0.0, Some(1.0), true), &w1 - &w0);
//! assert_eq!(path.t0(), f64::NEG_INFINITY);
//! ```
//!
//! ## Known Constraints
//!
//! Every time point is an independent draw. The result is reproducible and
//! cheap to query, but it is not a faithful Brownian motion: see the
//! [`brownian`] module documentation before using it for convergence studies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod brownian;
pub mod rng;

pub use brownian::{DeterministicBrownianPath, DiagonalLift};
pub use rng::PathRng;
