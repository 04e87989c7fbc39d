//! Traits describing the driving signals an integrator consumes.
//!
//! - [`ControlledPath`]: time-domain bounds plus point/interval evaluation
//! - [`BrownianPath`]: a controlled path that also reports its shape and
//!   Lévy-area capability

pub mod path;

pub use path::{BrownianPath, ControlledPath};
