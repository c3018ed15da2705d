use std::time::Duration;

use crate::{Site, Solution};

const DIVIDER: &str = "==========================================";

/// Renders the divider-bordered result block printed after a solve: route
/// length rounded to two decimals, the named stops joined by arrows, and
/// the elapsed seconds rounded to two decimals.
pub fn render_report(solution: &Solution, sites: &[Site], elapsed: Duration) -> String {
    let stops = solution
        .tour
        .iter()
        .map(|&stop| stop_label(sites, stop))
        .collect::<Vec<_>>()
        .join("\n-> ");

    format!(
        "{DIVIDER}\n\
         Shortest route length: {length:.2} km\n\
         {DIVIDER}\n\
         {stops}\n\
         {DIVIDER}\n\
         Calculation took: {seconds:.2} seconds\n\
         {DIVIDER}",
        length = solution.length,
        seconds = elapsed.as_secs_f64(),
    )
}

/// Stops are keyed by the site file's index column, same as the tour.
fn stop_label(sites: &[Site], stop: usize) -> String {
    match sites.iter().find(|site| site.index == stop) {
        Some(site) => site.to_string(),
        None => format!("Stop {stop}"),
    }
}
