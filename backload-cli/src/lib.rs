//! Command-line interface for planning backload trips.
//!
//! `backload plan request.json` reads a JSON trip request naming the trip's
//! origin and destination cities plus the open listings on the marketplace,
//! plans the trip with the default matcher and sequencer, and prints the
//! costed plan as JSON. Tuning knobs come from CLI flags, configuration
//! files, or `BACKLOAD_CMDS_PLAN_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod files;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_MAX_DETOUR_KM: &str = "max-detour-km";
const ARG_MAX_BACKLOADS: &str = "max-backloads";
const ARG_FUEL_PRICE: &str = "fuel-price";
const ARG_AVERAGE_SPEED: &str = "average-speed-kmh";
const ENV_PLAN_REQUEST: &str = "BACKLOAD_CMDS_PLAN_REQUEST_PATH";

/// Run the backload CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "backload",
    about = "Match return loads to truck trips and plan the stops",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a trip with backloads from a JSON request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
