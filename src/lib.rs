//! # tomoprep
//!
//! Prepares discretized input for a geophysical joint-inversion solver.
//!
//! This crate provides the building blocks for turning scattered survey data
//! into solver-ready files:
//! - Survey table reading (delimited text with header row)
//! - Unit conversion to SI (mGal → m/s², nT → Tesla, depth-positive-down)
//! - Nearest-sample surface interpolation over the horizontal plane
//! - Grid derivation from distinct survey coordinates plus depth layering
//! - Mesh cell emission with the surface-clamp invariant
//! - Flat data file and model grid file output
//! - Diagnostic VTK cross-section rendering

pub mod convert;
pub mod interp;
pub mod io;
pub mod mesh;
pub mod pipeline;

// Re-export main types for convenience
pub use convert::{MGAL_TO_MS2, NANOTESLA_TO_TESLA, ObservationPoint, convert_records};
pub use interp::{ElevationSample, InterpolatorError, SurfaceInterpolator, normalize_topography};
pub use io::{
    DataWriteError, MeshWriteError, SurveyFileError, SurveyRecord, TopographyPoint, VtkError,
    read_survey_file, read_topography_file, write_model_grid, write_observation_file,
    write_vtk_cross_section,
};
pub use mesh::{AxisPartition, DepthLayers, MeshCell, ModelGrid, SURFACE_TOLERANCE};
pub use pipeline::{
    ConversionSummary, GridConfig, GridSummary, PipelineError, convert_survey_data,
    create_model_grid,
};
