//! # Random Number Generation Infrastructure
//!
//! This module provides the keyed pseudo-random generator used by every path
//! in this crate.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a generator is fully determined by its [`PathKey`];
//!   the stream is ChaCha20, whose output is fixed by the algorithm rather
//!   than by the `rand` release in use
//! - **No global state**: generators are created per query from a derived key
//!   and dropped afterwards
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use path_core::types::PathKey;
//! use path_models::rng::PathRng;
//!
//! let mut rng = PathRng::from_key(PathKey::from_seed(12345));
//!
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```
//!
//! [`PathKey`]: path_core::types::PathKey

mod prng;

pub use prng::PathRng;
