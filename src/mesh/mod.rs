//! Topography-conforming voxel mesh construction.
//!
//! The mesh stores:
//! - Horizontal axis partitions derived from distinct survey coordinates
//! - A uniform stack of depth layers below the interpolated surface
//! - Per-cell geometry with the surface-clamp applied at emission
//!
//! Cells are emitted in k-major, j-next, i-fastest order; that ordering is a
//! contract with the downstream solver's mesh file reader.

mod axis;
mod grid;
mod layers;

pub use axis::AxisPartition;
pub use grid::{MeshCell, ModelGrid, SURFACE_TOLERANCE};
pub use layers::DepthLayers;
