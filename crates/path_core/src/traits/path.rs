//! Controlled-path contract for differential-equation integrators.
//!
//! An integrator asks a path for its domain once and then issues point or
//! interval queries during its stepping loop. Implementations decide what a
//! "control" is: a vector for plain Brownian samples, a matrix for paths
//! embedded in a matrix group.

use crate::types::{LevyArea, Shape};

/// Time-indexed driving signal.
///
/// # Contract
///
/// - `t0() <= t1()`; either may be infinite.
/// - `evaluate(t0, None, _)` is the value at a single time.
/// - `evaluate(t0, Some(t1), _)` is the increment over `[t0, t1]`.
/// - `left` selects left- or right-continuous evaluation at jumps. Continuous
///   paths may ignore it.
pub trait ControlledPath {
    /// Value produced by an evaluation.
    type Control;

    /// Lower bound of the time domain.
    fn t0(&self) -> f64;

    /// Upper bound of the time domain.
    fn t1(&self) -> f64;

    /// Evaluates the path at `t0`, or over `[t0, t1]` when `t1` is given.
    fn evaluate(&self, t0: f64, t1: Option<f64>, left: bool) -> Self::Control;

    /// Increment over `[t0, t1]` with left-continuous evaluation.
    #[inline]
    fn increment(&self, t0: f64, t1: f64) -> Self::Control {
        self.evaluate(t0, Some(t1), true)
    }

    /// Returns `true` if `[start, end]` lies inside the time domain.
    #[inline]
    fn covers(&self, start: f64, end: f64) -> bool {
        start >= self.t0() && end <= self.t1()
    }
}

/// Brownian driving signal with a fixed sample shape.
pub trait BrownianPath: ControlledPath {
    /// Shape of each sampled increment.
    fn shape(&self) -> &Shape;

    /// Auxiliary area terms this path provides.
    fn levy_area(&self) -> LevyArea;
}

impl<P: ControlledPath + ?Sized> ControlledPath for &P {
    type Control = P::Control;

    #[inline]
    fn t0(&self) -> f64 {
        (**self).t0()
    }

    #[inline]
    fn t1(&self) -> f64 {
        (**self).t1()
    }

    #[inline]
    fn evaluate(&self, t0: f64, t1: Option<f64>, left: bool) -> Self::Control {
        (**self).evaluate(t0, t1, left)
    }
}

impl<P: BrownianPath + ?Sized> BrownianPath for &P {
    #[inline]
    fn shape(&self) -> &Shape {
        (**self).shape()
    }

    #[inline]
    fn levy_area(&self) -> LevyArea {
        (**self).levy_area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear ramp on [0, 10], useful for checking the default methods.
    struct Ramp;

    impl ControlledPath for Ramp {
        type Control = f64;

        fn t0(&self) -> f64 {
            0.0
        }

        fn t1(&self) -> f64 {
            10.0
        }

        fn evaluate(&self, t0: f64, t1: Option<f64>, _left: bool) -> f64 {
            match t1 {
                Some(t1) => t1 - t0,
                None => t0,
            }
        }
    }

    #[test]
    fn test_increment_uses_interval_evaluation() {
        assert_eq!(Ramp.increment(2.0, 5.0), 3.0);
    }

    #[test]
    fn test_covers() {
        assert!(Ramp.covers(0.0, 10.0));
        assert!(Ramp.covers(1.0, 2.0));
        assert!(!Ramp.covers(-1.0, 2.0));
        assert!(!Ramp.covers(1.0, 11.0));
    }

    #[test]
    fn test_reference_forwards() {
        let path = &Ramp;
        assert_eq!(ControlledPath::t1(&path), 10.0);
        assert_eq!(path.evaluate(4.0, None, false), 4.0);
    }
}
