//! Check command implementation
//!
//! Prints the resolved configuration and the derived base key.

use path_core::traits::{BrownianPath, ControlledPath};
use tracing::info;

use crate::config::{ConfigError, LiepathConfig};
use crate::Result;

/// Render the resolved configuration
pub fn render(config: &LiepathConfig) -> Result<String> {
    let path = config.brownian_path()?;
    let solve = config.solve_config().map_err(ConfigError::from)?;

    let lines = [
        format!("key:        {}", path.key()),
        format!("shape:      {}", path.shape()),
        format!("levy area:  {}", path.levy_area()),
        format!("domain:     [{}, {}]", path.t0(), path.t1()),
        format!("solver:     {} (order {})", config.solver, config.solver.order()),
        format!("interval:   [{}, {}]", solve.t0(), solve.t1()),
        format!("dt0:        {}", solve.dt0()),
        format!("max_steps:  {}", solve.max_steps()),
        format!("save_steps: {}", config.save_steps),
        format!("log_level:  {}", config.log_level),
    ];
    Ok(lines.join("\n") + "\n")
}

/// Run the check command
pub fn run(config: &LiepathConfig) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config)?);
    info!("Configuration OK");
    Ok(())
}
