//! Matrix Lie groups that Brownian paths are lifted onto.
//!
//! Only the three-dimensional Heisenberg group is provided. Its elements are
//! upper unitriangular 3x3 matrices; the (0, 2) entry of a lifted Brownian
//! path accumulates the signed area swept by the first two coordinates.

pub mod heisenberg;

pub use heisenberg::{superdiagonal_generator, HeisenbergElement, GROUP_TOLERANCE};
