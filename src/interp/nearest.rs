//! Nearest-sample surface interpolation.
//!
//! The mesh pipeline needs the ground elevation at arbitrary cell centers,
//! but survey samples are irregularly spaced. A nearest-neighbor lookup over
//! the horizontal plane answers every query with the elevation of the closest
//! known sample, so there is no extrapolation failure mode: points outside
//! the sample hull simply pick up the nearest edge sample.
//!
//! The lookup is backed by an immutable k-d tree built once at construction;
//! queries do not re-fit. Distance ties resolve deterministically in tree
//! order, but callers must not rely on which sample wins a tie.

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use thiserror::Error;

use crate::io::TopographyPoint;

/// Error type for interpolator construction.
#[derive(Debug, Error)]
pub enum InterpolatorError {
    /// No elevation samples were supplied
    #[error("cannot build surface interpolator from zero elevation samples")]
    NoElevationSamples,
}

/// One elevation sample, normalized relative to the survey's highest point.
///
/// The maximum observed topography maps to 0; everything else is negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationSample {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

/// Normalize raw topography points against their maximum elevation.
///
/// Returns samples in input order with `elevation - max(elevation)`, so the
/// highest point has normalized elevation 0.
pub fn normalize_topography(points: &[TopographyPoint]) -> Vec<ElevationSample> {
    let max_elevation = points
        .iter()
        .map(|p| p.elevation)
        .fold(f64::NEG_INFINITY, f64::max);

    points
        .iter()
        .map(|p| ElevationSample {
            x: p.x,
            y: p.y,
            elevation: p.elevation - max_elevation,
        })
        .collect()
}

/// Nearest-sample elevation lookup over the horizontal plane.
#[derive(Debug)]
pub struct SurfaceInterpolator {
    tree: ImmutableKdTree<f64, 2>,
    elevations: Vec<f64>,
}

impl SurfaceInterpolator {
    /// Build the lookup from normalized elevation samples.
    ///
    /// The k-d tree is constructed eagerly; repeated queries reuse it.
    pub fn from_samples(samples: &[ElevationSample]) -> Result<Self, InterpolatorError> {
        if samples.is_empty() {
            return Err(InterpolatorError::NoElevationSamples);
        }

        let entries: Vec<[f64; 2]> = samples.iter().map(|s| [s.x, s.y]).collect();
        let tree = ImmutableKdTree::new_from_slice(&entries);
        let elevations = samples.iter().map(|s| s.elevation).collect();

        Ok(Self { tree, elevations })
    }

    /// Normalized elevation of the sample nearest to `(x, y)`.
    ///
    /// Never fails: every query, inside or outside the sample hull, resolves
    /// to some sample.
    pub fn elevation_at(&self, x: f64, y: f64) -> f64 {
        let nearest = self.tree.nearest_one::<SquaredEuclidean>(&[x, y]);
        self.elevations[nearest.item as usize]
    }

    /// Number of samples backing the lookup.
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }
}
