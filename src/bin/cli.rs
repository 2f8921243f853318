//! Command-line interface for the reactor library
//!
//! This binary loads a reaction network from a JSON definition and:
//! - Prints the species and reactions of the network
//! - Prints the rates of change at the declared concentrations
//! - Integrates the network and prints or saves the trajectory
//!
//! # Usage
//!
//! ```bash
//! # Show the network
//! reactor info --path network.json
//!
//! # Rates of change at the declared concentrations
//! reactor rates --path network.json
//!
//! # Integrate from t = 0 to t = 5 with RK5 and save the result
//! reactor simulate --path network.json --t1 5 --dt 0.01 --solver rk5 --output result.json
//! ```
//!
//! Logging is controlled through `RUST_LOG`, e.g. `RUST_LOG=debug`.

use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::info;
use reactor::{
    info::rates_table,
    io::{load_network, save_result},
    prelude::{ReactionSystem, SimulationResult, SimulationSetup},
    simulation::{ODEIntegrator, RK4, RK5},
};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Print the species and reactions of a network
    Info {
        /// Path to the network definition
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Print the rates of change at the declared concentrations
    Rates {
        /// Path to the network definition
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Integrate a network over time
    Simulate {
        /// Path to the network definition
        #[arg(short, long)]
        path: PathBuf,

        /// Start time, overrides the definition
        #[arg(long)]
        t0: Option<f64>,

        /// End time, overrides the definition
        #[arg(long)]
        t1: Option<f64>,

        /// Time step, overrides the definition
        #[arg(long)]
        dt: Option<f64>,

        /// Integration method
        #[arg(long, value_enum, default_value_t = Method::Rk4)]
        solver: Method,

        /// Path to save the result to, printed as a table if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Available integration methods
#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// Classic fourth order Runge-Kutta
    Rk4,
    /// Fifth order Runge-Kutta
    Rk5,
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "error:".red().bold(), error);
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Info { path } => {
            let system = ReactionSystem::try_from(load_network(path)?)?;
            println!("{system}");
        }
        Commands::Rates { path } => {
            let system = ReactionSystem::try_from(load_network(path)?)?;
            println!("{}", rates_table(&system));
        }
        Commands::Simulate {
            path,
            t0,
            t1,
            dt,
            solver,
            output,
        } => {
            let definition = load_network(path)?;
            let mut setup = definition.simulation.clone().unwrap_or_default();
            if let Some(t0) = t0 {
                setup.t0 = *t0;
            }
            if let Some(t1) = t1 {
                setup.t1 = *t1;
            }
            if let Some(dt) = dt {
                setup.dt = *dt;
            }

            let system = ReactionSystem::try_from(&definition)?;
            let result = match solver {
                Method::Rk4 => simulate(&system, &setup, RK4)?,
                Method::Rk5 => simulate(&system, &setup, RK5::default())?,
            };

            match output {
                Some(path) => {
                    save_result(path, &result)?;
                    info!("Saved {} time points to {}", result.len(), path.display());
                }
                None => println!("{result}"),
            }
        }
    }

    Ok(())
}

fn simulate<S: ODEIntegrator>(
    system: &ReactionSystem,
    setup: &SimulationSetup,
    solver: S,
) -> Result<SimulationResult, Box<dyn Error>> {
    Ok(system.integrate::<SimulationResult, S>(setup, solver)?)
}
