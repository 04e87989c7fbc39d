//! The three-dimensional Heisenberg group.
//!
//! Elements are written `(x, y, z)` and represented by
//!
//! ```text
//! | 1  x  z |
//! | 0  1  y |
//! | 0  0  1 |
//! ```
//!
//! with product `(x1, y1, z1)(x2, y2, z2) = (x1 + x2, y1 + y2, z1 + z2 + x1 y2)`.

use crate::types::PathError;
use nalgebra::DMatrix;
use std::ops::Mul;

/// Absolute tolerance used when checking group membership of a matrix.
pub const GROUP_TOLERANCE: f64 = 1e-9;

/// Element of the Heisenberg group in matrix coordinates.
///
/// # Examples
///
/// ```rust
/// use path_core::lie::HeisenbergElement;
///
/// let a = HeisenbergElement::new(1.0, 0.0, 0.0);
/// let b = HeisenbergElement::new(0.0, 1.0, 0.0);
///
/// // Non-commutative: the commutator lives in the centre
/// assert_eq!((a * b).z, 1.0);
/// assert_eq!((b * a).z, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeisenbergElement {
    /// Entry (0, 1).
    pub x: f64,
    /// Entry (1, 2).
    pub y: f64,
    /// Entry (0, 2), the central coordinate.
    pub z: f64,
}

impl HeisenbergElement {
    /// Creates an element from its matrix entries.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The group identity.
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Exponential of the algebra element with horizontal part `(dx, dy)`.
    ///
    /// This is the lift of a straight-line increment: its Lévy area is zero.
    #[inline]
    pub fn lift(dx: f64, dy: f64) -> Self {
        Self::new(dx, dy, 0.5 * dx * dy)
    }

    /// Group product `self * other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z + self.x * other.y,
        )
    }

    /// Group inverse.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, self.x * self.y - self.z)
    }

    /// Signed Lévy area of the horizontal path, `z - x y / 2`.
    #[inline]
    pub fn levy_area(&self) -> f64 {
        self.z - 0.5 * self.x * self.y
    }

    /// Returns the 3x3 matrix representation.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[1.0, self.x, self.z, 0.0, 1.0, self.y, 0.0, 0.0, 1.0],
        )
    }

    /// Reads an element from its matrix representation.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotInGroup`] if the matrix is not 3x3, or if its
    /// diagonal or strictly lower part deviates from the identity by more
    /// than [`GROUP_TOLERANCE`].
    pub fn from_matrix(m: &DMatrix<f64>) -> Result<Self, PathError> {
        if m.nrows() != 3 || m.ncols() != 3 {
            return Err(PathError::NotInGroup(format!(
                "expected 3x3, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }

        for i in 0..3 {
            for j in 0..=i {
                let expected = if i == j { 1.0 } else { 0.0 };
                let value = m[(i, j)];
                // NaN fails the comparison as well
                if !((value - expected).abs() <= GROUP_TOLERANCE) {
                    return Err(PathError::NotInGroup(format!(
                        "entry ({}, {}) is {}, expected {}",
                        i, j, value, expected
                    )));
                }
            }
        }

        Ok(Self::new(m[(0, 1)], m[(1, 2)], m[(0, 2)]))
    }
}

impl Mul for HeisenbergElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

/// Square matrix with ones on the first superdiagonal and zeros elsewhere.
///
/// For `n = 3`, right-multiplying a group element by this generator times a
/// diagonal control `diag(w1, w2, w3)` gives `y · [[0, w2, 0], [0, 0, w3], [0, 0, 0]]`,
/// which stays tangent to the group.
pub fn superdiagonal_generator(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| if j == i + 1 { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_matrix_product_agrees_with_compose() {
        let a = HeisenbergElement::new(0.3, -1.2, 0.7);
        let b = HeisenbergElement::new(-0.5, 2.0, 0.1);
        let product = a.to_matrix() * b.to_matrix();
        let composed = a.compose(&b).to_matrix();
        assert_relative_eq!(product, composed, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse() {
        let g = HeisenbergElement::new(1.5, -0.25, 3.0);
        let e = g * g.inverse();
        assert_relative_eq!(e.x, 0.0);
        assert_relative_eq!(e.y, 0.0);
        assert_relative_eq!(e.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lift_has_zero_area() {
        assert_relative_eq!(HeisenbergElement::lift(2.0, -3.0).levy_area(), 0.0);
    }

    #[test]
    fn test_square_loop_encloses_unit_area() {
        // Right, up, left, down around the unit square
        let loop_ = HeisenbergElement::lift(1.0, 0.0)
            * HeisenbergElement::lift(0.0, 1.0)
            * HeisenbergElement::lift(-1.0, 0.0)
            * HeisenbergElement::lift(0.0, -1.0);
        assert_relative_eq!(loop_.x, 0.0);
        assert_relative_eq!(loop_.y, 0.0);
        assert_relative_eq!(loop_.levy_area(), 1.0);
    }

    #[test]
    fn test_from_matrix_rejects_wrong_size() {
        let err = HeisenbergElement::from_matrix(&DMatrix::identity(2, 2)).unwrap_err();
        assert_eq!(
            err,
            PathError::NotInGroup("expected 3x3, got 2x2".to_string())
        );
    }

    #[test]
    fn test_from_matrix_rejects_lower_entries() {
        let mut m = DMatrix::identity(3, 3);
        m[(2, 0)] = 0.5;
        assert!(HeisenbergElement::from_matrix(&m).is_err());

        let mut m = DMatrix::identity(3, 3);
        m[(1, 1)] = f64::NAN;
        assert!(HeisenbergElement::from_matrix(&m).is_err());
    }

    #[test]
    fn test_superdiagonal_generator() {
        let n = superdiagonal_generator(3);
        let expected =
            DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(n, expected);
    }

    fn element() -> impl Strategy<Value = HeisenbergElement> {
        (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64)
            .prop_map(|(x, y, z)| HeisenbergElement::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_associative(a in element(), b in element(), c in element()) {
            let left = (a * b) * c;
            let right = a * (b * c);
            prop_assert!((left.z - right.z).abs() < 1e-9);
            prop_assert!((left.x - right.x).abs() < 1e-12);
            prop_assert!((left.y - right.y).abs() < 1e-12);
        }

        #[test]
        fn prop_matrix_round_trip(g in element()) {
            prop_assert_eq!(HeisenbergElement::from_matrix(&g.to_matrix()).unwrap(), g);
        }

        #[test]
        fn prop_inverse_on_both_sides(g in element()) {
            let left = g.inverse() * g;
            prop_assert!(left.z.abs() < 1e-9);
            prop_assert!(left.x.abs() < 1e-12 && left.y.abs() < 1e-12);
        }
    }
}
