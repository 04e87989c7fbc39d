//! Stateless Brownian path over the whole real line.

use crate::rng::PathRng;
use nalgebra::DVector;
use path_core::traits::{BrownianPath, ControlledPath};
use path_core::types::{LevyArea, PathError, PathKey, Shape};

/// Deterministic, unbounded Brownian path sampler.
///
/// Holds an immutable key and shape and nothing else. Evaluation is a pure
/// function of `(key, shape, t)`.
///
/// Samples are returned flat: a shape of `(2, 3)` yields a vector of length
/// six in row-major order.
///
/// # Examples
///
/// ```rust
/// use path_core::traits::ControlledPath;
/// use path_models::brownian::DeterministicBrownianPath;
///
/// let path = DeterministicBrownianPath::from_seed(0, vec![3]).unwrap();
///
/// // Repeated queries agree bit for bit
/// assert_eq!(path.sample(0.25), path.sample(0.25));
///
/// // The continuity flag has no effect
/// assert_eq!(
///     path.evaluate(0.0, Some(1.0), true),
///     path.evaluate(0.0, Some(1.0), false),
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeterministicBrownianPath {
    key: PathKey,
    shape: Shape,
}

impl DeterministicBrownianPath {
    /// Creates a path from a key and a validated shape.
    #[inline]
    pub fn new(key: PathKey, shape: Shape) -> Self {
        Self { key, shape }
    }

    /// Creates a path from an integer seed and raw dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidShape`] if any dimension is zero.
    pub fn from_seed(seed: u64, dims: impl Into<Vec<usize>>) -> Result<Self, PathError> {
        Ok(Self::new(PathKey::from_seed(seed), Shape::new(dims)?))
    }

    /// Creates a path from a hex-encoded key and raw dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidSeed`] for malformed key text and
    /// [`PathError::InvalidShape`] if any dimension is zero.
    pub fn from_hex_key(key: &str, dims: impl Into<Vec<usize>>) -> Result<Self, PathError> {
        Ok(Self::new(PathKey::from_hex(key)?, Shape::new(dims)?))
    }

    /// Returns the base key.
    #[inline]
    pub fn key(&self) -> PathKey {
        self.key
    }

    /// Number of scalar components in each sample.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.shape.size()
    }

    /// Value of the path at a single time.
    pub fn sample(&self, t: f64) -> DVector<f64> {
        let mut value = DVector::zeros(self.dimension());
        self.sample_into(t, value.as_mut_slice());
        value
    }

    /// Writes the value at time `t` into a caller-provided buffer.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `buffer.len()` differs from [`Self::dimension`].
    pub fn sample_into(&self, t: f64, buffer: &mut [f64]) {
        debug_assert_eq!(buffer.len(), self.dimension());
        PathRng::from_key(self.key.fold_in_time(t)).fill_normal(buffer);
    }
}

impl ControlledPath for DeterministicBrownianPath {
    type Control = DVector<f64>;

    #[inline]
    fn t0(&self) -> f64 {
        f64::NEG_INFINITY
    }

    #[inline]
    fn t1(&self) -> f64 {
        f64::INFINITY
    }

    fn evaluate(&self, t0: f64, t1: Option<f64>, _left: bool) -> DVector<f64> {
        match t1 {
            Some(t1) => self.sample(t1) - self.sample(t0),
            None => self.sample(t0),
        }
    }
}

impl BrownianPath for DeterministicBrownianPath {
    #[inline]
    fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    fn levy_area(&self) -> LevyArea {
        LevyArea::BrownianIncrement
    }
}
