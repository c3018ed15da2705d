use super::{ORIGIN, Solution, Subsets, check_size};
use crate::{CostMatrix, Error, Result};

/// Hard ceiling on vertex count: the visited subset is a machine-word
/// bitmask over the N - 1 non-origin vertices. Memory is the practical
/// limit well before this (the table has (N - 1) * 2^(N - 1) states,
/// so roughly N <= 25 is workable).
const MAX_SITES: usize = 32;

/// Held-Karp dynamic program over (visited-subset, last-vertex) states:
/// O(N^2 * 2^N) time against brute force's O(N!).
///
/// States are built bottom-up by subset size, so every lookup hits a
/// strictly smaller subset already in the table. Ties keep the first
/// minimizing candidate in enumeration order, same caveat as brute force.
pub fn solve_held_karp(matrix: &CostMatrix) -> Result<Solution> {
    let n = check_size(matrix)?;
    if n > MAX_SITES {
        return Err(Error::invalid_input(format!(
            "Held-Karp is limited to {MAX_SITES} sites, got {n}"
        )));
    }

    // Bit `i` of a mask means non-origin vertex `i + 1` has been visited.
    let slots = n - 1;
    let full_mask: usize = (1 << slots) - 1;

    // Dense (mask, last-vertex) table, indexed mask * slots + slot.
    // Only member vertices of a mask ever get written or read.
    let mut best_cost = vec![f64::INFINITY; (full_mask + 1) * slots];
    let mut predecessor = vec![ORIGIN; (full_mask + 1) * slots];

    // Size-one subsets: a single direct leg out of the origin.
    for slot in 0..slots {
        best_cost[(1 << slot) * slots + slot] = matrix.cost(ORIGIN, slot + 1);
    }

    for size in 2..=slots {
        for subset in Subsets::new(1, slots, size) {
            let mask = subset
                .iter()
                .fold(0usize, |mask, &vertex| mask | 1 << (vertex - 1));

            for &vertex in &subset {
                let without = mask & !(1 << (vertex - 1));
                let mut cheapest = f64::INFINITY;
                let mut via = ORIGIN;

                for &prior in &subset {
                    if prior == vertex {
                        continue;
                    }
                    let candidate =
                        best_cost[without * slots + (prior - 1)] + matrix.cost(prior, vertex);
                    if candidate < cheapest {
                        cheapest = candidate;
                        via = prior;
                    }
                }

                best_cost[mask * slots + (vertex - 1)] = cheapest;
                predecessor[mask * slots + (vertex - 1)] = via;
            }
        }
    }

    // Close the tour through the cheapest final vertex.
    let mut optimal_length = f64::INFINITY;
    let mut last = 1;
    for vertex in 1..n {
        let candidate = best_cost[full_mask * slots + (vertex - 1)] + matrix.cost(vertex, ORIGIN);
        if candidate < optimal_length {
            optimal_length = candidate;
            last = vertex;
        }
    }

    // Walk the predecessor chain back to the origin, shrinking the mask as
    // each vertex is peeled off, then flip into origin-first order.
    let mut interior = Vec::with_capacity(slots);
    let mut mask = full_mask;
    let mut vertex = last;
    while vertex != ORIGIN {
        interior.push(vertex);
        let via = predecessor[mask * slots + (vertex - 1)];
        mask &= !(1 << (vertex - 1));
        vertex = via;
    }
    interior.reverse();

    Ok(Solution::from_interior(optimal_length, interior))
}
