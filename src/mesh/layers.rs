//! Depth layer stacking beneath the interpolated surface.

/// A stack of uniform-thickness depth layers.
///
/// Offsets are measured downward from the surface (depth-positive-down):
/// layer `k` starts at `surface_z + offset(k)` and ends one thickness below.
#[derive(Clone, Debug)]
pub struct DepthLayers {
    thickness: f64,
    offsets: Vec<f64>,
}

impl DepthLayers {
    /// Stack uniform layers of `thickness` until `total_depth` is covered.
    ///
    /// The layer count is `ceil(total_depth / thickness)` and every layer,
    /// including the last, keeps the full thickness, so the modeled depth may
    /// exceed `total_depth` by up to one thickness.
    pub fn uniform(total_depth: f64, thickness: f64) -> Self {
        assert!(thickness > 0.0, "layer thickness must be positive");
        assert!(total_depth > 0.0, "total depth must be positive");

        let count = (total_depth / thickness).ceil() as usize;
        let mut offsets = Vec::with_capacity(count);
        let mut depth = 0.0;
        for _ in 0..count {
            offsets.push(depth);
            depth += thickness;
        }

        Self { thickness, offsets }
    }

    /// Number of layers.
    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    /// Uniform layer thickness.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Cumulative offset of layer `k` below the surface.
    #[inline]
    pub fn offset(&self, k: usize) -> f64 {
        self.offsets[k]
    }

    /// All cumulative offsets, starting at 0.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Total modeled depth (layer count times thickness).
    pub fn modeled_depth(&self) -> f64 {
        self.offsets[self.offsets.len() - 1] + self.thickness
    }
}
