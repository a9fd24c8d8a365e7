//! High-level pipelines from survey file to solver input files.
//!
//! Two independent entry points mirror the two solver inputs:
//! - [`convert_survey_data`] produces the flat gravity/magnetic observation
//!   files.
//! - [`create_model_grid`] produces the topography-conforming voxel mesh.
//!
//! Both are pure functions of their inputs plus output paths: no shared
//! state, no retries, single-threaded unless the `parallel` feature is
//! enabled (which changes execution, never output).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::convert::convert_records;
use crate::interp::{InterpolatorError, SurfaceInterpolator, normalize_topography};
use crate::io::{
    DataWriteError, MeshWriteError, SurveyFileError, VtkError, read_survey_file,
    read_topography_file, write_model_grid, write_observation_file, write_vtk_cross_section,
};
use crate::mesh::{AxisPartition, DepthLayers, ModelGrid};

/// Error type covering both pipelines.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("survey input: {0}")]
    Survey(#[from] SurveyFileError),

    #[error("surface interpolation: {0}")]
    Interpolator(#[from] InterpolatorError),

    #[error("observation output: {0}")]
    DataWrite(#[from] DataWriteError),

    #[error("mesh output: {0}")]
    MeshWrite(#[from] MeshWriteError),

    #[error("cross-section output: {0}")]
    Vtk(#[from] VtkError),
}

/// Result of the data-conversion pipeline.
///
/// `n_records` is the value the solver's parameter file expects in its
/// `forward.data.*.nData` fields.
#[derive(Clone, Debug)]
pub struct ConversionSummary {
    pub n_records: usize,
    pub gravity_path: PathBuf,
    pub magnetic_path: PathBuf,
}

/// Convert a survey file into the solver's gravity and magnetic data files.
///
/// Reads and converts every record before opening either output, so schema
/// and parse failures leave no output files behind. Writes
/// `gravity_data.txt` and `magnetic_data.txt` into `output_dir`.
pub fn convert_survey_data(
    input: &Path,
    output_dir: &Path,
) -> Result<ConversionSummary, PipelineError> {
    let records = read_survey_file(input)?;
    let (gravity, magnetic) = convert_records(&records);

    let gravity_path = output_dir.join("gravity_data.txt");
    let magnetic_path = output_dir.join("magnetic_data.txt");
    write_observation_file(&gravity_path, &gravity)?;
    write_observation_file(&magnetic_path, &magnetic)?;

    Ok(ConversionSummary {
        n_records: records.len(),
        gravity_path,
        magnetic_path,
    })
}

/// Configuration for the mesh-generation pipeline.
///
/// Cell sizes and depths are in survey units (meters). `cross_section`
/// enables the diagnostic VTU render of the middle Y-slice.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Nominal cell width in x (edge padding at the axis extremes)
    pub dx: f64,
    /// Nominal cell height in y
    pub dy: f64,
    /// Depth layer thickness
    pub dz: f64,
    /// Target total depth below the topographic surface
    pub depth_below_topography: f64,
    /// Optional output path for the cross-section VTU
    pub cross_section: Option<PathBuf>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dx: 1000.0,
            dy: 1000.0,
            dz: 100.0,
            depth_below_topography: 2000.0,
            cross_section: None,
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_size(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub fn with_layer_thickness(mut self, dz: f64) -> Self {
        self.dz = dz;
        self
    }

    pub fn with_depth(mut self, depth_below_topography: f64) -> Self {
        self.depth_below_topography = depth_below_topography;
        self
    }

    pub fn with_cross_section(mut self, path: impl Into<PathBuf>) -> Self {
        self.cross_section = Some(path.into());
        self
    }
}

/// Result of the mesh-generation pipeline.
#[derive(Clone, Debug)]
pub struct GridSummary {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub n_cells: usize,
    pub path: PathBuf,
}

/// Build the voxel model grid from a survey file and write it to `output`.
///
/// The horizontal partitions conform to the distinct survey coordinates, the
/// surface comes from nearest-sample interpolation of the normalized
/// topography, and the mesh file streams cell by cell: treat an interrupted
/// run's output as invalid and regenerate it.
pub fn create_model_grid(
    input: &Path,
    output: &Path,
    config: &GridConfig,
) -> Result<GridSummary, PipelineError> {
    let points = read_topography_file(input)?;
    let samples = normalize_topography(&points);
    let surface = SurfaceInterpolator::from_samples(&samples)?;

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let grid = ModelGrid::new(
        AxisPartition::from_coordinates(&xs, config.dx),
        AxisPartition::from_coordinates(&ys, config.dy),
        DepthLayers::uniform(config.depth_below_topography, config.dz),
    );

    #[cfg(feature = "parallel")]
    let cells = grid.cells_parallel(&surface);
    #[cfg(not(feature = "parallel"))]
    let cells = grid.cells(&surface);

    write_model_grid(output, &grid, &cells)?;

    if let Some(vtu_path) = &config.cross_section {
        write_vtk_cross_section(vtu_path, &grid, &cells, None)?;
    }

    let (nx, ny, nz) = grid.dims();
    Ok(GridSummary {
        nx,
        ny,
        nz,
        n_cells: grid.n_cells(),
        path: output.to_path_buf(),
    })
}
