//! Exact Travelling Salesman solving over geographic sites.
//! Two interchangeable solvers (brute-force permutation search and the
//! Held-Karp dynamic program) plus the CSV ingestion, haversine cost-matrix,
//! and console-report glue used by the CLI.

mod error;
mod io;
pub mod logging;
mod matrix;
mod site;
mod solver;

pub use error::{Error, Result};
pub use io::input::SolverInput;
pub use io::options::{LogFormat, LogLevel, SolverOptions};
pub use io::report::render_report;
pub use matrix::CostMatrix;
pub use site::Site;
pub use solver::{Solution, solve_brute_force, solve_held_karp};
