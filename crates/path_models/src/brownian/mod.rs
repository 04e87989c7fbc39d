//! Brownian driving signals.
//!
//! # Pointwise Independent Re-seeding
//!
//! [`DeterministicBrownianPath`] does not simulate a continuous sample path.
//! The value at time `t` is a standard normal vector drawn from a generator
//! keyed by `fold_in(key, t)`, and the increment over `[t0, t1]` is the
//! difference of two such draws. Consequences:
//!
//! - queries cost O(1), need no memory of earlier queries and can run on any
//!   number of threads;
//! - the time domain is the whole real line;
//! - the process is **not** a Brownian motion. `W(t1) - W(t0)` has variance 2
//!   whatever the interval length, and increments over adjacent intervals
//!   share an endpoint draw, so their correlation is -1/2 instead of 0.
//!
//! Integrators that rely on the scaling or independence of Brownian
//! increments will not converge to the Itô or Stratonovich solution when
//! driven by this path. It is suited to reproducible smoke tests of
//! solver plumbing.
//!
//! # Matrix Context
//!
//! [`DiagonalLift`] embeds any vector-valued path as the main diagonal of a
//! square matrix, which is the control format expected by matrix-group
//! vector fields.

mod deterministic;
mod lift;

pub use deterministic::DeterministicBrownianPath;
pub use lift::DiagonalLift;
