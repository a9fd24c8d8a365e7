//! Model grid file output.
//!
//! Writes the solver's mesh description:
//!
//! ```text
//! 40
//! -500 500 -500 500 0 100 0.0 1 1 1
//! 500 1500 -500 500 20 120 0.0 2 1 1
//! ...
//! ```
//!
//! Line 1 is the total cell count `nx*ny*nz`; each following line is
//! `x_min x_max y_min y_max z_min z_max value i j k` with 1-based indices, in
//! k-major, j-next, i-fastest order. Cells stream to the file one line at a
//! time, so an interrupted run leaves a partial file that must be
//! regenerated, not consumed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mesh::{MeshCell, ModelGrid};

/// Error type for mesh file output.
#[derive(Debug, Error)]
pub enum MeshWriteError {
    /// IO error writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the model grid file from pre-generated cells.
///
/// The header count comes from the grid dimensions, not the slice length, so
/// a mismatched slice is a logic error upstream; cells are expected in
/// emission order as produced by [`ModelGrid::cells`].
pub fn write_model_grid(
    path: &Path,
    grid: &ModelGrid,
    cells: &[MeshCell],
) -> Result<(), MeshWriteError> {
    debug_assert_eq!(cells.len(), grid.n_cells());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", grid.n_cells())?;
    for c in cells {
        writeln!(
            writer,
            "{} {} {} {} {} {} {:.1} {} {} {}",
            c.x_min, c.x_max, c.y_min, c.y_max, c.z_top, c.z_bottom, c.value, c.i, c.j, c.k
        )?;
    }

    writer.flush()?;
    Ok(())
}
