//! Horizontal axis partitions derived from observed coordinates.

/// An ordered set of cell edges along one horizontal axis.
///
/// Edges are derived from the distinct observed coordinates, not from a fixed
/// lattice: each distinct coordinate becomes a cell center, interior edges sit
/// at the midpoints between consecutive centers, and the configured cell size
/// only pads the two extremes by half a cell. With unevenly spaced samples
/// the cell widths are therefore uneven as well.
#[derive(Clone, Debug)]
pub struct AxisPartition {
    edges: Vec<f64>,
}

impl AxisPartition {
    /// Build a partition from observed coordinates and a nominal cell size.
    ///
    /// Duplicate coordinates collapse to a single grid line, so `count()`
    /// equals the number of distinct values in `coords`.
    pub fn from_coordinates(coords: &[f64], cell_size: f64) -> Self {
        assert!(!coords.is_empty(), "need at least one coordinate");
        assert!(cell_size > 0.0, "cell size must be positive");

        let mut unique = coords.to_vec();
        unique.sort_by(f64::total_cmp);
        unique.dedup();

        let n = unique.len();
        let mut edges = Vec::with_capacity(n + 1);
        edges.push(unique[0] - 0.5 * cell_size);
        for pair in unique.windows(2) {
            edges.push(0.5 * (pair[0] + pair[1]));
        }
        edges.push(unique[n - 1] + 0.5 * cell_size);

        Self { edges }
    }

    /// Number of cells along this axis.
    pub fn count(&self) -> usize {
        self.edges.len() - 1
    }

    /// All edge coordinates, strictly increasing.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Bounds `(min, max)` of cell `i`.
    #[inline]
    pub fn bounds(&self, i: usize) -> (f64, f64) {
        (self.edges[i], self.edges[i + 1])
    }

    /// Midpoint of cell `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        0.5 * (self.edges[i] + self.edges[i + 1])
    }
}
