use crate::{Error, Result, Site};

/// Dense square matrix of travel costs, flattened row-major.
/// `cost(i, j)` is the cost of travelling directly from vertex `i` to
/// vertex `j`. The diagonal is expected to be zero and every entry finite
/// and non-negative; neither is re-checked on lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid_data(format!(
                    "matrix is not square: row {} has {} entries, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
            costs.extend_from_slice(row);
        }
        Ok(Self { n, costs })
    }

    /// Builds the pairwise haversine distance matrix (kilometers) for the
    /// given sites, in file order. Symmetric with a zero diagonal.
    pub fn from_sites(sites: &[Site]) -> Self {
        let n = sites.len();
        let mut costs = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    costs[i * n + j] = sites[i].distance_km(&sites[j]);
                }
            }
        }
        Self { n, costs }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.n + to]
    }
}

#[cfg(test)]
mod tests {
    use super::CostMatrix;
    use crate::site::test_site;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.5], vec![2.5, 0.0]]).expect("square");

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.cost(0, 1), 1.5);
        assert_eq!(matrix.cost(1, 0), 2.5);
        assert_eq!(matrix.cost(1, 1), 0.0);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]])
            .expect_err("ragged rows should fail");
        assert!(err.to_string().contains("not square"));
    }

    #[test]
    fn from_rows_accepts_empty_input() {
        let matrix = CostMatrix::from_rows(Vec::new()).expect("empty is trivially square");
        assert!(matrix.is_empty());
    }

    #[test]
    fn from_sites_is_symmetric_with_zero_diagonal() {
        let sites = vec![
            test_site(1, "a", 52.5200, 13.4050),
            test_site(2, "b", 48.1351, 11.5820),
            test_site(3, "c", 50.1109, 8.6821),
        ];
        let matrix = CostMatrix::from_sites(&sites);

        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.cost(i, i), 0.0);
            for j in 0..3 {
                assert!((matrix.cost(i, j) - matrix.cost(j, i)).abs() < 1e-9);
            }
        }
        assert!(matrix.cost(0, 1) > 0.0);
    }
}
