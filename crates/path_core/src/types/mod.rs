//! Core types for path construction.
//!
//! This module provides:
//! - [`PathKey`]: opaque generator key with pure sub-key derivation
//! - [`Shape`]: validated dimensionality of a sampled increment
//! - [`LevyArea`]: capability tag for auxiliary stochastic-area terms
//! - [`PathError`]: construction-time failures

pub mod error;
pub mod key;
pub mod levy;
pub mod shape;

pub use error::PathError;
pub use key::{canonical_time_bits, PathKey, KEY_LEN};
pub use levy::LevyArea;
pub use shape::Shape;
