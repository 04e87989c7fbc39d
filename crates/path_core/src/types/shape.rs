//! Validated dimensionality of a sampled increment.

use super::error::PathError;
use std::fmt;
use std::str::FromStr;

/// Fixed, immutable dimensionality of each sampled increment.
///
/// An empty dimension list is a scalar shape of size one. Every listed
/// dimension must be positive.
///
/// # Examples
///
/// ```rust
/// use path_core::types::Shape;
///
/// let shape = Shape::new(vec![2, 3]).unwrap();
/// assert_eq!(shape.rank(), 2);
/// assert_eq!(shape.size(), 6);
///
/// assert!(Shape::new(vec![3, 0]).is_err());
///
/// let parsed: Shape = "3".parse().unwrap();
/// assert_eq!(parsed, Shape::vector(3).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a shape from its dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidShape`] if any dimension is zero.
    pub fn new(dims: impl Into<Vec<usize>>) -> Result<Self, PathError> {
        let dims = dims.into();
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(PathError::InvalidShape(format!(
                "dimension {} is zero in {:?}",
                axis, dims
            )));
        }
        Ok(Self { dims })
    }

    /// Creates a rank-one shape of the given length.
    #[inline]
    pub fn vector(len: usize) -> Result<Self, PathError> {
        Self::new(vec![len])
    }

    /// The rank-zero shape.
    #[inline]
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// Returns the dimensions.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns `true` for the rank-zero shape.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = PathError;

    fn try_from(dims: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(dims)
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (3,) for rank one, (2, 3) otherwise
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.dims.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// Parses comma-separated dimensions, e.g. `"3"`, `"2,3"` or `"(2, 3)"`.
impl FromStr for Shape {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let dims = inner
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>().map_err(|_| {
                    PathError::InvalidShape(format!("'{}' is not a dimension size", part))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dims)
    }
}
