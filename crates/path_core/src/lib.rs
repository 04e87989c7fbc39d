//! # path_core: Foundation Types for Lifted Brownian Paths
//!
//! ## Layer 1 (Foundation) Role
//!
//! path_core is the bottom layer of the workspace, providing:
//! - Opaque generator keys with pure key derivation (`types::key`)
//! - Validated increment shapes (`types::shape`)
//! - Lévy-area capability tags (`types::levy`)
//! - Error types: `PathError` (`types::error`)
//! - The controlled-path contract consumed by integrators (`traits`)
//! - The three-dimensional Heisenberg group (`lie`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other path_* crates, with minimal external dependencies:
//! - nalgebra: Matrix representation of group elements
//! - sha2: One-way key derivation
//! - thiserror: Structured errors
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use path_core::lie::HeisenbergElement;
//! use path_core::types::{PathKey, Shape};
//!
//! let key = PathKey::from_seed(0);
//! let shape = Shape::new(vec![3]).unwrap();
//! assert_eq!(shape.size(), 3);
//!
//! // Keys derived from distinct times differ
//! assert_ne!(key.fold_in_time(0.0), key.fold_in_time(1.0));
//!
//! // Group elements round-trip through their matrix form
//! let g = HeisenbergElement::lift(0.5, -1.0);
//! let m = g.to_matrix();
//! assert_eq!(HeisenbergElement::from_matrix(&m).unwrap(), g);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Shape` and `LevyArea`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lie;
pub mod traits;
pub mod types;
