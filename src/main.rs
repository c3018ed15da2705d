use std::{process::ExitCode, time::Instant};

use log::info;

use tsp_exact_core::{
    CostMatrix, Result, SolverInput, SolverOptions, logging, render_report, solve_brute_force,
    solve_held_karp,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let input = SolverInput::from_args()?;

    info!("options: {options}");
    info!(
        "input: file={} sites={}",
        input.file().display(),
        input.site_count()
    );

    let matrix = CostMatrix::from_sites(input.sites());
    let algorithm = if options.brute_force {
        "brute force"
    } else {
        "Held-Karp"
    };

    println!("Calculating optimal route using the {algorithm} algorithm...");
    let started = Instant::now();
    let solution = if options.brute_force {
        solve_brute_force(&matrix)?
    } else {
        solve_held_karp(&matrix)?
    };
    let elapsed = started.elapsed();

    info!(
        "solve: algo={algorithm} n={} length_km={:.2} time_s={:.2}",
        matrix.len(),
        solution.length,
        elapsed.as_secs_f64()
    );

    println!("{}", render_report(&solution, input.sites(), elapsed));

    Ok(())
}
