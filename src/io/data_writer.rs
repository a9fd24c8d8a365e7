//! Observation data file output.
//!
//! Writes the flat `gravity_data.txt` / `magnetic_data.txt` format consumed
//! by the inversion solver:
//!
//! ```text
//! 3
//! 0 0 -50 1e-5
//! 1000 0 -48 9.9e-6
//! 2000 0 -47 1.01e-5
//! ```
//!
//! Line 1 is the record count; each following line is `X Y Z value`, one per
//! observation, in input order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::convert::ObservationPoint;

/// Error type for observation file output.
#[derive(Debug, Error)]
pub enum DataWriteError {
    /// IO error writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one observation series to the solver's flat data format.
pub fn write_observation_file(
    path: &Path,
    points: &[ObservationPoint],
) -> Result<(), DataWriteError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", points.len())?;
    for p in points {
        writeln!(writer, "{} {} {} {}", p.x, p.y, p.z, p.value)?;
    }

    writer.flush()?;
    Ok(())
}
