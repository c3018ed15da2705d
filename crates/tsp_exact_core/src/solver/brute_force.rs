use super::{ORIGIN, Permutations, Solution, check_size};
use crate::{CostMatrix, Result};

/// Exhaustive search over every candidate tour: O(N!), intended as a
/// small-N reference for the dynamic program.
///
/// Ties between equally short tours keep the first permutation seen
/// (strict `<`); that order is an enumeration artifact, not a contract.
pub fn solve_brute_force(matrix: &CostMatrix) -> Result<Solution> {
    let n = check_size(matrix)?;

    let mut optimal_length = f64::INFINITY;
    let mut optimal_interior = Vec::new();

    for interior in Permutations::new((1..n).collect()) {
        let mut length = matrix.cost(ORIGIN, interior[0]);
        for leg in interior.windows(2) {
            length += matrix.cost(leg[0], leg[1]);
        }
        length += matrix.cost(interior[n - 2], ORIGIN);

        if length < optimal_length {
            optimal_length = length;
            optimal_interior = interior;
        }
    }

    Ok(Solution::from_interior(optimal_length, optimal_interior))
}
