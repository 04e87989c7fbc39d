//! Solve command implementation
//!
//! Lifts the configured path onto the Heisenberg group by integrating
//! `dY = Y · N · diag(dW)` from the identity, where `N` is the superdiagonal
//! generator.

use nalgebra::DMatrix;
use path_core::lie::{superdiagonal_generator, HeisenbergElement};
use path_core::traits::BrownianPath;
use path_models::brownian::DiagonalLift;
use path_solver::{diffeqsolve, ControlTerm, LeftInvariantField, Solution};
use tracing::info;

use crate::config::{ConfigError, LiepathConfig};
use crate::{CliError, Result};

/// Matrix size of the Heisenberg group representation
const GROUP_DIM: usize = 3;

/// Integrate the lift for the given configuration
pub fn lift(config: &LiepathConfig) -> Result<Solution> {
    let path = config.brownian_path()?;
    let size = path.dimension();
    if size != GROUP_DIM {
        return Err(CliError::InvalidArgument(format!(
            "the Heisenberg lift needs a path of size {}, got shape {}",
            GROUP_DIM,
            path.shape()
        )));
    }

    let term = ControlTerm::new(
        LeftInvariantField::new(superdiagonal_generator(GROUP_DIM))?,
        DiagonalLift::new(path),
    );
    let y0 = DMatrix::identity(GROUP_DIM, GROUP_DIM);
    let solve_config = config.solve_config().map_err(ConfigError::from)?;
    Ok(diffeqsolve(&term, config.solver, &y0, &solve_config)?)
}

/// Render the solve output
pub fn render(config: &LiepathConfig) -> Result<String> {
    let solution = lift(config)?;
    let final_state = solution
        .final_state()
        .ok_or_else(|| CliError::InvalidArgument("solve produced no states".to_string()))?;
    let group = HeisenbergElement::from_matrix(final_state)?;

    let mut out = format!("solver: {}\n{}\n", solution.solver, solution.stats);
    if solution.ts.len() > 1 {
        for (t, y) in solution.ts.iter().zip(&solution.ys) {
            out.push_str(&format!("t = {}:{}", t, y));
        }
    }
    out.push_str(&format!("final state at t = {}:{}", config.t1, final_state));
    out.push_str(&format!(
        "coordinates: x = {:.12}, y = {:.12}, z = {:.12}\n",
        group.x, group.y, group.z
    ));
    out.push_str(&format!("levy area: {:.12}\n", group.levy_area()));
    Ok(out)
}

/// Run the solve command
pub fn run(config: &LiepathConfig) -> Result<()> {
    info!("Solving Heisenberg lift...");
    print!("{}", render(config)?);
    info!("Solve complete");
    Ok(())
}
