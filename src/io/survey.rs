//! Survey table reader.
//!
//! Reads delimited survey tables with a header row. Both comma-separated and
//! whitespace-separated files are accepted; the delimiter is detected per
//! line. Lines starting with `#` are treated as comments.
//!
//! # File Format
//!
//! ```text
//! X,Y,Topography,Grav,Mag
//! 0.0,0.0,512.3,12.5,48250.0
//! 1000.0,0.0,498.7,11.9,48180.0
//! ```
//!
//! Column lookup is by header name (case-insensitive); extra columns are
//! ignored. The full five-column layout is required for data conversion,
//! while mesh generation only needs `X`, `Y` and `Topography`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Columns required for the data-conversion pipeline.
pub const SURVEY_COLUMNS: [&str; 5] = ["X", "Y", "Topography", "Grav", "Mag"];

/// Columns required for the mesh-generation pipeline.
pub const TOPOGRAPHY_COLUMNS: [&str; 3] = ["X", "Y", "Topography"];

/// Error type for survey file operations.
#[derive(Debug, Error)]
pub enum SurveyFileError {
    /// IO error reading file (includes unresolvable input paths)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more required columns are absent from the header row
    #[error("missing column(s) {missing:?}; expected {required:?}")]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },

    /// A data line could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The file has no data rows (or no header at all)
    #[error("no data rows found")]
    Empty,
}

/// One survey observation: position, ground elevation and the two field
/// readings in survey units (mGal, nT).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurveyRecord {
    pub x: f64,
    pub y: f64,
    pub topography: f64,
    pub grav: f64,
    pub mag: f64,
}

/// A survey position with its ground elevation, as consumed by the mesh
/// pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopographyPoint {
    pub x: f64,
    pub y: f64,
    pub elevation: f64,
}

/// Read a full survey file for data conversion.
///
/// Requires the columns `X`, `Y`, `Topography`, `Grav` and `Mag`; fails with
/// [`SurveyFileError::MissingColumns`] naming the whole required list if any
/// is absent. Records are returned in file order.
pub fn read_survey_file(path: &Path) -> Result<Vec<SurveyRecord>, SurveyFileError> {
    let columns = read_columns(path, &SURVEY_COLUMNS)?;
    let n = columns[0].len();

    let mut records = Vec::with_capacity(n);
    for row in 0..n {
        records.push(SurveyRecord {
            x: columns[0][row],
            y: columns[1][row],
            topography: columns[2][row],
            grav: columns[3][row],
            mag: columns[4][row],
        });
    }
    Ok(records)
}

/// Read the positions and elevations needed for mesh generation.
///
/// Only `X`, `Y` and `Topography` must be present; `Grav`/`Mag` and any other
/// columns are ignored.
pub fn read_topography_file(path: &Path) -> Result<Vec<TopographyPoint>, SurveyFileError> {
    let columns = read_columns(path, &TOPOGRAPHY_COLUMNS)?;
    let n = columns[0].len();

    let mut points = Vec::with_capacity(n);
    for row in 0..n {
        points.push(TopographyPoint {
            x: columns[0][row],
            y: columns[1][row],
            elevation: columns[2][row],
        });
    }
    Ok(points)
}

/// Split a data or header line on the detected delimiter.
fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(|s| s.trim()).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// Read the named columns from a delimited table, in the order requested.
///
/// All returned columns have equal length. Fails eagerly on the header before
/// touching any data row, so a schema problem is reported even for files with
/// no data section.
fn read_columns(path: &Path, required: &[&str]) -> Result<Vec<Vec<f64>>, SurveyFileError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();

    // Header row: first non-empty, non-comment line.
    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                break line;
            }
            None => return Err(SurveyFileError::Empty),
        }
    };

    let header_fields = split_fields(&header);
    let mut indices = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for name in required {
        match header_fields
            .iter()
            .position(|f| f.eq_ignore_ascii_case(name))
        {
            Some(idx) => indices.push(idx),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(SurveyFileError::MissingColumns {
            missing,
            required: required.iter().map(|s| s.to_string()).collect(),
        });
    }

    let max_index = indices.iter().copied().max().unwrap_or(0);
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); indices.len()];

    for (line_num, line_result) in lines {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line);
        if fields.len() <= max_index {
            return Err(SurveyFileError::Parse {
                line: line_num + 1,
                message: format!(
                    "expected at least {} fields, found {}",
                    max_index + 1,
                    fields.len()
                ),
            });
        }

        for (col, &idx) in indices.iter().enumerate() {
            let value: f64 = fields[idx].parse().map_err(|e| SurveyFileError::Parse {
                line: line_num + 1,
                message: format!("column '{}': {}", required[col], e),
            })?;
            columns[col].push(value);
        }
    }

    if columns[0].is_empty() {
        return Err(SurveyFileError::Empty);
    }
    Ok(columns)
}
