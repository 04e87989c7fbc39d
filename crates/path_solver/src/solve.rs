//! Constant-step integration driver.

use crate::config::{SaveAt, SolveConfig};
use crate::error::SolveError;
use crate::solver::Solver;
use crate::term::Term;
use nalgebra::DMatrix;
use std::fmt;
use tracing::{debug, trace};

/// Relative slack when dividing the interval into steps, so that
/// `1.0 / 0.05` counts as 20 steps rather than 21.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Step counters for a finished solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Steps attempted.
    pub num_steps: usize,
    /// Steps accepted.
    pub num_accepted_steps: usize,
    /// Steps rejected. Always zero with constant step size.
    pub num_rejected_steps: usize,
    /// Configured step budget.
    pub max_steps: usize,
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "num_steps={} num_accepted_steps={} num_rejected_steps={} max_steps={}",
            self.num_steps, self.num_accepted_steps, self.num_rejected_steps, self.max_steps
        )
    }
}

/// Output of [`diffeqsolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Times of the saved states.
    pub ts: Vec<f64>,
    /// Saved states, aligned with `ts`.
    pub ys: Vec<DMatrix<f64>>,
    /// Step counters.
    pub stats: SolveStats,
    /// Method used.
    pub solver: Solver,
}

impl Solution {
    /// State at the end of integration.
    #[inline]
    pub fn final_state(&self) -> Option<&DMatrix<f64>> {
        self.ys.last()
    }
}

/// Number of constant steps needed to cover `span`.
fn step_count(span: f64, dt0: f64, max_steps: usize) -> Result<usize, SolveError> {
    let raw = span / dt0;
    let count = (raw - STEP_COUNT_TOLERANCE * raw.max(1.0)).ceil().max(1.0);
    if count > max_steps as f64 {
        return Err(SolveError::MaxStepsReached {
            max_steps,
            required: if count < usize::MAX as f64 {
                count as usize
            } else {
                usize::MAX
            },
        });
    }
    Ok(count as usize)
}

/// Integrates `term` from `config.t0()` to `config.t1()` with constant steps.
///
/// Each step takes the control once over the whole step and evaluates the
/// stages of the solver's tableau. The final step is shortened so that it
/// ends exactly at `t1`.
///
/// # Errors
///
/// - [`SolveError::Config`] if the configuration is invalid
/// - [`SolveError::OutOfDomain`] if the term's control does not cover the interval
/// - [`SolveError::MaxStepsReached`] if the interval needs more than `max_steps` steps
/// - [`SolveError::DimensionMismatch`] if the vector field output does not match the state
pub fn diffeqsolve<T: Term>(
    term: &T,
    solver: Solver,
    y0: &DMatrix<f64>,
    config: &SolveConfig,
) -> Result<Solution, SolveError> {
    config.validate()?;

    let (t0, t1, dt0) = (config.t0(), config.t1(), config.dt0());
    let (lower, upper) = term.domain();
    if t0 < lower || t1 > upper {
        return Err(SolveError::OutOfDomain {
            t0,
            t1,
            lower,
            upper,
        });
    }
    term.check_state(y0)?;

    let n_steps = step_count(t1 - t0, dt0, config.max_steps())?;
    let tableau = solver.tableau();
    debug!(%solver, t0, t1, dt0, n_steps, "Starting solve");

    let save_steps = config.save_at() == SaveAt::Steps;
    let capacity = if save_steps { n_steps + 1 } else { 1 };
    let mut ts = Vec::with_capacity(capacity);
    let mut ys = Vec::with_capacity(capacity);
    if save_steps {
        ts.push(t0);
        ys.push(y0.clone());
    }

    let mut y = y0.clone();
    let mut stages: Vec<DMatrix<f64>> = Vec::with_capacity(tableau.stages());

    for step in 0..n_steps {
        // Step boundaries from the step index, not by accumulation
        let t = t0 + step as f64 * dt0;
        let t_next = if step + 1 == n_steps {
            t1
        } else {
            t0 + (step + 1) as f64 * dt0
        };
        let h = t_next - t;
        let control = term.contr(t, t_next);

        stages.clear();
        for (row, &c) in tableau.a.iter().zip(tableau.c) {
            let mut y_stage = y.clone();
            for (&a, k) in row.iter().zip(&stages) {
                if a != 0.0 {
                    y_stage += k * a;
                }
            }
            let k = term.vf_prod(t + c * h, &y_stage, &control)?;
            if k.shape() != y.shape() {
                return Err(SolveError::DimensionMismatch {
                    context: "vector field output",
                    expected: y.shape(),
                    actual: k.shape(),
                });
            }
            stages.push(k);
        }

        for (&b, k) in tableau.b.iter().zip(&stages) {
            if b != 0.0 {
                y += k * b;
            }
        }

        trace!(step, t = t_next, "Accepted step");
        if save_steps {
            ts.push(t_next);
            ys.push(y.clone());
        }
    }

    if !save_steps {
        ts.push(t1);
        ys.push(y);
    }

    let stats = SolveStats {
        num_steps: n_steps,
        num_accepted_steps: n_steps,
        num_rejected_steps: 0,
        max_steps: config.max_steps(),
    };
    debug!(%stats, "Solve finished");

    Ok(Solution {
        ts,
        ys,
        stats,
        solver,
    })
}
