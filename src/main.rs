//! CLI driver: loads a JSON fixture, runs the solver, prints the report.
//! A `clap`-derived `Args`, loads one JSON fixture, prints the solve
//! report. No server, no file-watching loop — one file in, one report out.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cvrptw_solver::config::SaParams;
use cvrptw_solver::input::{load_problem, OrderInput, VehicleInput};
use cvrptw_solver::report::build_report;
use cvrptw_solver::solve_seeded;

#[derive(Parser, Debug)]
#[command(about = "Capacitated vehicle routing with time windows")]
struct Args {
    /// JSON fixture with `vehicles` and `orders` arrays.
    #[arg(long)]
    file: PathBuf,

    /// Label to stamp on the output report.
    #[arg(long, default_value = "default")]
    scenario: String,

    /// RNG seed for the annealing pass.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = SaParams::default().initial_temp)]
    t0: f64,

    #[arg(long, default_value_t = SaParams::default().cooling_rate)]
    cooling_rate: f64,

    #[arg(long, default_value_t = SaParams::default().max_iterations)]
    iterations: u32,
}

#[derive(serde::Deserialize)]
struct Fixture {
    vehicles: Vec<VehicleInput>,
    orders: Vec<OrderInput>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let raw = match fs::read_to_string(&args.file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("failed to read {}: {e}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let fixture: Fixture = match serde_json::from_str(&raw) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("failed to parse {}: {e}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let problem = match load_problem(fixture.vehicles, fixture.orders) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid problem instance: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let params = SaParams {
        initial_temp: args.t0,
        cooling_rate: args.cooling_rate,
        max_iterations: args.iterations,
    };

    let (cost, solution) = solve_seeded(&problem, &params, args.seed);
    println!("solved {} with cost {cost:.2}", args.file.display());

    let report = build_report(&problem, &solution, &args.scenario);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize report: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
