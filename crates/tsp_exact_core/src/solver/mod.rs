mod brute_force;
mod held_karp;
mod permutations;
mod subsets;

pub use brute_force::solve_brute_force;
pub use held_karp::solve_held_karp;
pub(crate) use permutations::Permutations;
pub(crate) use subsets::Subsets;

use crate::{CostMatrix, Error, Result};

/// The fixed start and end of every tour (displayed as stop 1).
pub(crate) const ORIGIN: usize = 0;

/// An optimal closed tour. `tour` holds 1-indexed stop identifiers, has
/// N + 1 elements, and starts and ends at stop 1; `length` is the summed
/// edge cost along it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub length: f64,
    pub tour: Vec<usize>,
}

impl Solution {
    /// Closes and re-indexes an interior vertex sequence (internal 0-based,
    /// origin omitted) into the public 1-indexed tour form.
    pub(crate) fn from_interior(length: f64, interior: Vec<usize>) -> Self {
        let mut tour = Vec::with_capacity(interior.len() + 2);
        tour.push(ORIGIN + 1);
        tour.extend(interior.into_iter().map(|vertex| vertex + 1));
        tour.push(ORIGIN + 1);
        Self { length, tour }
    }
}

/// A closed tour needs the origin plus at least one other site.
pub(crate) fn check_size(matrix: &CostMatrix) -> Result<usize> {
    let n = matrix.len();
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "a tour needs at least 2 sites, got {n}"
        )));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::Solution;

    #[test]
    fn from_interior_closes_and_reindexes_the_tour() {
        let solution = Solution::from_interior(10.0, vec![2, 1, 3]);
        assert_eq!(solution.tour, vec![1, 3, 2, 4, 1]);
        assert_eq!(solution.length, 10.0);
    }
}
