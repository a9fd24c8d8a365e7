//! Voxel model grid assembly.
//!
//! Combines the horizontal axis partitions with the depth layer stack and the
//! surface interpolator to produce one [`MeshCell`] per `(i, j, k)` index.
//! Depth is positive down: a surface above the reference elevation maps to a
//! negative z, and layers extend toward larger z.
//!
//! Cell emission order is part of the downstream file format: k outermost,
//! then j, then i fastest. The optional `parallel` feature computes cells by
//! index range but collects them in the same order.

use crate::interp::SurfaceInterpolator;

use super::axis::AxisPartition;
use super::layers::DepthLayers;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tolerance for the surface clamp: a cell top may sit above the interpolated
/// surface by at most this much before it is pulled down onto it.
pub const SURFACE_TOLERANCE: f64 = 1e-6;

/// One voxel of the model grid.
///
/// `value` is a placeholder (always 0.0 in output) for the solver's starting
/// model; `i`, `j`, `k` are 1-based indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshCell {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_top: f64,
    pub z_bottom: f64,
    pub value: f64,
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// The full model grid: two horizontal partitions plus a depth layer stack.
#[derive(Clone, Debug)]
pub struct ModelGrid {
    pub x: AxisPartition,
    pub y: AxisPartition,
    pub layers: DepthLayers,
}

impl ModelGrid {
    pub fn new(x: AxisPartition, y: AxisPartition, layers: DepthLayers) -> Self {
        Self { x, y, layers }
    }

    /// Grid dimensions `(nx, ny, nz)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x.count(), self.y.count(), self.layers.count())
    }

    /// Total cell count `nx * ny * nz`.
    pub fn n_cells(&self) -> usize {
        self.x.count() * self.y.count() * self.layers.count()
    }

    /// Compute the cell at 0-based indices `(i, j, k)`.
    ///
    /// The cell's horizontal center is queried against the surface; its top
    /// face is the surface depth plus the layer offset, clamped back onto the
    /// surface if floating-point noise pushed it above (only reachable for
    /// k = 0, deeper layers start at or below the surface by construction).
    pub fn cell(
        &self,
        surface: &SurfaceInterpolator,
        i: usize,
        j: usize,
        k: usize,
    ) -> MeshCell {
        let (x_min, x_max) = self.x.bounds(i);
        let (y_min, y_max) = self.y.bounds(j);

        // Normalized elevation is <= 0; negating gives depth-positive-down.
        let z_surface = -surface.elevation_at(self.x.center(i), self.y.center(j));

        let mut z_top = z_surface + self.layers.offset(k);
        let z_bottom = z_top + self.layers.thickness();

        if z_top < z_surface - SURFACE_TOLERANCE {
            z_top = z_surface;
        }

        MeshCell {
            x_min,
            x_max,
            y_min,
            y_max,
            z_top,
            z_bottom,
            value: 0.0,
            i: i + 1,
            j: j + 1,
            k: k + 1,
        }
    }

    /// Generate every cell in emission order (k outer, j middle, i inner).
    pub fn cells(&self, surface: &SurfaceInterpolator) -> Vec<MeshCell> {
        let (nx, ny, nz) = self.dims();
        let mut cells = Vec::with_capacity(self.n_cells());

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    cells.push(self.cell(surface, i, j, k));
                }
            }
        }
        cells
    }

    /// Generate every cell with rayon, preserving emission order.
    ///
    /// Cells have no cross-cell dependencies, so the flat index range can be
    /// split freely; collecting an indexed parallel map keeps the output
    /// identical to [`ModelGrid::cells`].
    #[cfg(feature = "parallel")]
    pub fn cells_parallel(&self, surface: &SurfaceInterpolator) -> Vec<MeshCell> {
        let (nx, ny, _) = self.dims();

        (0..self.n_cells())
            .into_par_iter()
            .map(|idx| {
                let k = idx / (nx * ny);
                let rem = idx % (nx * ny);
                let j = rem / nx;
                let i = rem % nx;
                self.cell(surface, i, j, k)
            })
            .collect()
    }
}
