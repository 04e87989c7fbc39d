//! Sample command implementation
//!
//! Evaluates the configured path at a single time, or its increment over an
//! interval, as a vector or as a diagonal matrix.

use nalgebra::{DMatrix, DVector};
use path_core::traits::{BrownianPath, ControlledPath};
use path_models::brownian::DiagonalLift;
use tracing::{debug, info};

use crate::config::LiepathConfig;
use crate::Result;

/// Render the sample output
pub fn render(config: &LiepathConfig, t0: f64, t1: Option<f64>, matrix: bool) -> Result<String> {
    let path = config.brownian_path()?;
    debug!(key = %path.key(), shape = %path.shape(), "Path constructed");

    let label = match t1 {
        Some(t1) => format!("W({}) - W({})", t1, t0),
        None => format!("W({})", t0),
    };

    let mut out = format!("shape: {}\n", path.shape());
    if matrix {
        let value: DMatrix<f64> = DiagonalLift::new(&path).evaluate(t0, t1, true);
        out.push_str(&format!("{} (diagonal):{}", label, value));
    } else {
        let value: DVector<f64> = path.evaluate(t0, t1, true);
        let entries: Vec<String> = value.iter().map(|v| format!("{:.12}", v)).collect();
        out.push_str(&format!("{}: [{}]\n", label, entries.join(", ")));
    }
    Ok(out)
}

/// Run the sample command
pub fn run(config: &LiepathConfig, t0: f64, t1: Option<f64>, matrix: bool) -> Result<()> {
    info!("Sampling path...");
    print!("{}", render(config, t0, t1, matrix)?);
    Ok(())
}
