//! Surface interpolation over scattered survey samples.

mod nearest;

pub use nearest::{
    ElevationSample, InterpolatorError, SurfaceInterpolator, normalize_topography,
};
