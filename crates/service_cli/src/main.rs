//! liepath CLI - deterministic Brownian paths and their group lifts
//!
//! This is the operational entry point for the path workspace.
//!
//! # Commands
//!
//! - `liepath sample --t0 <T> [--t1 <T>] [--matrix]` - Evaluate the path at a time or over an interval
//! - `liepath solve` - Lift the path onto the Heisenberg group
//! - `liepath check` - Print the resolved configuration
//!
//! # Configuration
//!
//! Settings are resolved with priority CLI > `LIEPATH_*` environment
//! variables > TOML file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel};

/// Deterministic Brownian path CLI
#[derive(Parser)]
#[command(name = "liepath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Integer seed for the base key
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// 64-character hex key, overrides --seed
    #[arg(short, long, global = true)]
    key: Option<String>,

    /// Sample shape, comma-separated (e.g. "3" or "2,3")
    #[arg(long, global = true)]
    shape: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the path at a time, or its increment over an interval
    Sample {
        /// Evaluation time, or interval start when --t1 is given
        #[arg(long, allow_hyphen_values = true)]
        t0: f64,

        /// Interval end
        #[arg(long, allow_hyphen_values = true)]
        t1: Option<f64>,

        /// Print the diagonal matrix embedding instead of the vector
        #[arg(short, long)]
        matrix: bool,
    },

    /// Lift the path onto the Heisenberg group
    Solve {
        /// Runge-Kutta method (euler, heun, dopri5)
        #[arg(long)]
        solver: Option<String>,

        /// Start of integration
        #[arg(long, allow_hyphen_values = true)]
        t0: Option<f64>,

        /// End of integration
        #[arg(long, allow_hyphen_values = true)]
        t1: Option<f64>,

        /// Constant step size
        #[arg(long)]
        dt0: Option<f64>,

        /// Step budget
        #[arg(long)]
        max_steps: Option<usize>,

        /// Print the state after every step
        #[arg(long)]
        save_steps: bool,
    },

    /// Print the resolved configuration
    Check,
}

impl Cli {
    fn args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            seed: self.seed,
            key: self.key.clone(),
            shape: self.shape.clone(),
            log_level: self.log_level.clone(),
            ..Default::default()
        };
        if let Commands::Solve {
            solver,
            t0,
            t1,
            dt0,
            max_steps,
            save_steps,
        } = &self.command
        {
            args.solver = solver.clone();
            args.t0 = *t0;
            args.t1 = *t1;
            args.dt0 = *dt0;
            args.max_steps = *max_steps;
            args.save_steps = *save_steps;
        }
        args
    }
}

/// Initialise tracing, preferring `RUST_LOG` over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.args())?;

    init_tracing(config.log_level);
    info!(
        seed = config.seed,
        shape = ?config.shape,
        solver = %config.solver,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Sample { t0, t1, matrix } => commands::sample::run(&config, t0, t1, matrix),
        Commands::Solve { .. } => commands::solve::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
