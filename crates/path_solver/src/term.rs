//! Terms of a differential equation.
//!
//! A [`Term`] pairs a vector field `f(t, y)` with a control `dX`. The solver
//! asks the term for the control over a whole step once and then applies the
//! vector field at every stage:
//!
//! ```text
//! k_i = prod(f(t + c_i h, y_i), contr(t, t + h))
//! ```

use crate::error::SolveError;
use nalgebra::DMatrix;
use path_core::traits::ControlledPath;

/// Matrix-valued vector field `f(t, y)`.
///
/// Closures `Fn(f64, &DMatrix<f64>) -> DMatrix<f64>` implement this trait.
pub trait VectorField {
    /// Evaluates the field.
    fn eval(&self, t: f64, y: &DMatrix<f64>) -> DMatrix<f64>;

    /// Rejects states the field cannot be evaluated on.
    ///
    /// Called once with the initial state before stepping starts.
    fn check_state(&self, _y: &DMatrix<f64>) -> Result<(), SolveError> {
        Ok(())
    }
}

impl<F> VectorField for F
where
    F: Fn(f64, &DMatrix<f64>) -> DMatrix<f64>,
{
    #[inline]
    fn eval(&self, t: f64, y: &DMatrix<f64>) -> DMatrix<f64> {
        self(t, y)
    }
}

/// Left-invariant field `f(t, y) = y · A` for a fixed square generator `A`.
///
/// Flows of this field stay in the matrix group generated by `A`: with `A`
/// strictly upper triangular and `y0` upper unitriangular, every state is
/// upper unitriangular.
///
/// # Examples
///
/// ```rust
/// use nalgebra::DMatrix;
/// use path_core::lie::superdiagonal_generator;
/// use path_solver::{LeftInvariantField, VectorField};
///
/// let field = LeftInvariantField::new(superdiagonal_generator(3)).unwrap();
/// let y = DMatrix::identity(3, 3);
/// assert_eq!(field.eval(0.0, &y), superdiagonal_generator(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LeftInvariantField {
    generator: DMatrix<f64>,
}

impl LeftInvariantField {
    /// Creates the field from a square generator.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if the generator is not square.
    pub fn new(generator: DMatrix<f64>) -> Result<Self, SolveError> {
        let (rows, cols) = generator.shape();
        if rows != cols {
            return Err(SolveError::DimensionMismatch {
                context: "left-invariant generator",
                expected: (rows, rows),
                actual: (rows, cols),
            });
        }
        Ok(Self { generator })
    }

    /// Returns the generator.
    #[inline]
    pub fn generator(&self) -> &DMatrix<f64> {
        &self.generator
    }
}

impl VectorField for LeftInvariantField {
    #[inline]
    fn eval(&self, _t: f64, y: &DMatrix<f64>) -> DMatrix<f64> {
        y * &self.generator
    }

    fn check_state(&self, y: &DMatrix<f64>) -> Result<(), SolveError> {
        let n = self.generator.nrows();
        if y.ncols() != n {
            return Err(SolveError::DimensionMismatch {
                context: "left-invariant state",
                expected: (y.nrows(), n),
                actual: y.shape(),
            });
        }
        Ok(())
    }
}

/// A vector field paired with its control.
pub trait Term {
    /// Control over one step.
    type Control;

    /// Evaluates the vector field.
    fn vf(&self, t: f64, y: &DMatrix<f64>) -> DMatrix<f64>;

    /// Control over `[t0, t1]`.
    fn contr(&self, t0: f64, t1: f64) -> Self::Control;

    /// Applies a vector field value to a control.
    fn prod(&self, vf: &DMatrix<f64>, control: &Self::Control) -> Result<DMatrix<f64>, SolveError>;

    /// `prod(vf(t, y), control)`.
    #[inline]
    fn vf_prod(
        &self,
        t: f64,
        y: &DMatrix<f64>,
        control: &Self::Control,
    ) -> Result<DMatrix<f64>, SolveError> {
        self.prod(&self.vf(t, y), control)
    }

    /// Interval on which the control is defined.
    #[inline]
    fn domain(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Rejects initial states the vector field cannot be evaluated on.
    #[inline]
    fn check_state(&self, _y: &DMatrix<f64>) -> Result<(), SolveError> {
        Ok(())
    }
}

/// Deterministic term `f(t, y) dt`.
#[derive(Clone, Debug)]
pub struct OdeTerm<V> {
    vector_field: V,
}

impl<V: VectorField> OdeTerm<V> {
    /// Wraps a vector field.
    #[inline]
    pub fn new(vector_field: V) -> Self {
        Self { vector_field }
    }
}

impl<V: VectorField> Term for OdeTerm<V> {
    type Control = f64;

    #[inline]
    fn vf(&self, t: f64, y: &DMatrix<f64>) -> DMatrix<f64> {
        self.vector_field.eval(t, y)
    }

    #[inline]
    fn contr(&self, t0: f64, t1: f64) -> f64 {
        t1 - t0
    }

    #[inline]
    fn prod(&self, vf: &DMatrix<f64>, control: &f64) -> Result<DMatrix<f64>, SolveError> {
        Ok(vf * *control)
    }

    #[inline]
    fn check_state(&self, y: &DMatrix<f64>) -> Result<(), SolveError> {
        self.vector_field.check_state(y)
    }
}

/// Term `f(t, y) dX` driven by a matrix-valued controlled path.
///
/// The product is the matrix product `f(t, y) · dX`, where `dX` is the path
/// increment over the step.
///
/// # Examples
///
/// ```rust
/// use nalgebra::DMatrix;
/// use path_core::lie::superdiagonal_generator;
/// use path_models::brownian::{DeterministicBrownianPath, DiagonalLift};
/// use path_solver::{ControlTerm, LeftInvariantField, Term};
///
/// let path = DiagonalLift::new(DeterministicBrownianPath::from_seed(0, vec![3]).unwrap());
/// let field = LeftInvariantField::new(superdiagonal_generator(3)).unwrap();
/// let term = ControlTerm::new(field, path);
///
/// let dx = term.contr(0.0, 0.05);
/// let k = term.vf_prod(0.0, &DMatrix::identity(3, 3), &dx).unwrap();
/// assert_eq!(k[(0, 1)], dx[(1, 1)]);
/// assert_eq!(k[(1, 2)], dx[(2, 2)]);
/// ```
#[derive(Clone, Debug)]
pub struct ControlTerm<V, P> {
    vector_field: V,
    control: P,
}

impl<V, P> ControlTerm<V, P>
where
    V: VectorField,
    P: ControlledPath<Control = DMatrix<f64>>,
{
    /// Pairs a vector field with a controlled path.
    #[inline]
    pub fn new(vector_field: V, control: P) -> Self {
        Self {
            vector_field,
            control,
        }
    }

    /// Returns the driving path.
    #[inline]
    pub fn control(&self) -> &P {
        &self.control
    }
}

impl<V, P> Term for ControlTerm<V, P>
where
    V: VectorField,
    P: ControlledPath<Control = DMatrix<f64>>,
{
    type Control = DMatrix<f64>;

    #[inline]
    fn vf(&self, t: f64, y: &DMatrix<f64>) -> DMatrix<f64> {
        self.vector_field.eval(t, y)
    }

    #[inline]
    fn contr(&self, t0: f64, t1: f64) -> DMatrix<f64> {
        self.control.evaluate(t0, Some(t1), true)
    }

    fn prod(&self, vf: &DMatrix<f64>, control: &DMatrix<f64>) -> Result<DMatrix<f64>, SolveError> {
        if vf.ncols() != control.nrows() {
            return Err(SolveError::DimensionMismatch {
                context: "control product",
                expected: (vf.ncols(), control.ncols()),
                actual: control.shape(),
            });
        }
        Ok(vf * control)
    }

    #[inline]
    fn domain(&self) -> (f64, f64) {
        (self.control.t0(), self.control.t1())
    }

    #[inline]
    fn check_state(&self, y: &DMatrix<f64>) -> Result<(), SolveError> {
        self.vector_field.check_state(y)
    }
}
