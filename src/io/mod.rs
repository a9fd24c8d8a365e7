//! I/O for survey tables and solver input files.
//!
//! This module provides:
//! - **Survey reader**: delimited text tables with a header row (comma or
//!   whitespace separated)
//! - **Observation writers**: `gravity_data.txt` / `magnetic_data.txt` flat
//!   data files
//! - **Mesh writer**: the `model_grid.txt` voxel description
//! - **VTK output**: diagnostic cross-section rendering for ParaView
//!
//! # File Formats
//!
//! ## Survey Table
//!
//! ```text
//! X,Y,Topography,Grav,Mag
//! 0.0,0.0,512.3,12.5,48250.0
//! ```
//!
//! ## Observation Data Files
//!
//! ```text
//! 1
//! 0 0 -512.3 0.000125
//! ```
//!
//! ## Model Grid File
//!
//! ```text
//! 40
//! -500 500 -500 500 0 100 0.0 1 1 1
//! ```

mod data_writer;
mod mesh_writer;
mod survey;
mod vtk;

pub use data_writer::{DataWriteError, write_observation_file};
pub use mesh_writer::{MeshWriteError, write_model_grid};
pub use survey::{
    SURVEY_COLUMNS, SurveyFileError, SurveyRecord, TOPOGRAPHY_COLUMNS, TopographyPoint,
    read_survey_file, read_topography_file,
};
pub use vtk::{VtkError, write_vtk_cross_section};
