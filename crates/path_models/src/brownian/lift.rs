//! Diagonal matrix embedding of vector-valued paths.

use nalgebra::{DMatrix, DVector};
use path_core::traits::{BrownianPath, ControlledPath};
use path_core::types::{LevyArea, Shape};

/// Presents a vector-valued path as a matrix-valued one.
///
/// Each evaluation `v` becomes `diag(v)`: a square matrix with `v` on the
/// main diagonal and zeros elsewhere. Interval evaluations embed the
/// difference, so `diag(v1 - v0) == diag(v1) - diag(v0)` holds exactly.
///
/// # Examples
///
/// ```rust
/// use path_core::traits::ControlledPath;
/// use path_models::brownian::{DeterministicBrownianPath, DiagonalLift};
///
/// let path = DeterministicBrownianPath::from_seed(0, vec![3]).unwrap();
/// let lifted = DiagonalLift::new(path.clone());
///
/// let m = lifted.evaluate(0.0, None, true);
/// assert_eq!(m.shape(), (3, 3));
/// assert_eq!(m.diagonal(), path.sample(0.0));
/// assert_eq!(m[(0, 1)], 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DiagonalLift<P> {
    inner: P,
}

impl<P> DiagonalLift<P> {
    /// Wraps a vector-valued path.
    #[inline]
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped path.
    #[inline]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the underlying path.
    #[inline]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> ControlledPath for DiagonalLift<P>
where
    P: ControlledPath<Control = DVector<f64>>,
{
    type Control = DMatrix<f64>;

    #[inline]
    fn t0(&self) -> f64 {
        self.inner.t0()
    }

    #[inline]
    fn t1(&self) -> f64 {
        self.inner.t1()
    }

    fn evaluate(&self, t0: f64, t1: Option<f64>, left: bool) -> DMatrix<f64> {
        DMatrix::from_diagonal(&self.inner.evaluate(t0, t1, left))
    }
}

impl<P> BrownianPath for DiagonalLift<P>
where
    P: BrownianPath<Control = DVector<f64>>,
{
    #[inline]
    fn shape(&self) -> &Shape {
        self.inner.shape()
    }

    #[inline]
    fn levy_area(&self) -> LevyArea {
        self.inner.levy_area()
    }
}
