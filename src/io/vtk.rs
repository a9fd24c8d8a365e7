//! VTK cross-section output for mesh diagnostics.
//!
//! Renders one Y-slice of the model grid as a VTU (XML UnstructuredGrid)
//! file viewable in ParaView: each mesh cell in the slice becomes a quad in
//! the (x, depth) plane, with its layer index and top depth attached as cell
//! data. This is a diagnostic aid for eyeballing how the layer stack follows
//! the interpolated surface; it has no bearing on solver input.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mesh::{MeshCell, ModelGrid};

/// Error type for VTK operations.
#[derive(Debug, Error)]
pub enum VtkError {
    /// I/O error during file operations.
    #[error("VTK I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested slice index is outside the grid.
    #[error("slice index {j} out of range for ny = {ny}")]
    SliceOutOfRange { j: usize, ny: usize },
}

/// Minimal VTK XML writer.
struct VtkWriter<W: Write> {
    writer: BufWriter<W>,
    indent: usize,
}

impl<W: Write> VtkWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            indent: 0,
        }
    }

    fn write_indent(&mut self) -> std::io::Result<()> {
        for _ in 0..self.indent {
            write!(self.writer, "  ")?;
        }
        Ok(())
    }

    fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "<?xml version=\"1.0\"?>")?;
        writeln!(
            self.writer,
            "<VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"LittleEndian\">"
        )?;
        self.indent += 1;
        Ok(())
    }

    fn write_footer(&mut self) -> std::io::Result<()> {
        self.indent -= 1;
        writeln!(self.writer, "</VTKFile>")?;
        self.writer.flush()?;
        Ok(())
    }

    fn start_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> std::io::Result<()> {
        self.write_indent()?;
        write!(self.writer, "<{}", name)?;
        for (key, value) in attrs {
            write!(self.writer, " {}=\"{}\"", key, value)?;
        }
        writeln!(self.writer, ">")?;
        self.indent += 1;
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> std::io::Result<()> {
        self.indent -= 1;
        self.write_indent()?;
        writeln!(self.writer, "</{}>", name)?;
        Ok(())
    }

    fn write_data_array_f64(&mut self, name: &str, data: &[f64]) -> std::io::Result<()> {
        self.write_indent()?;
        writeln!(
            self.writer,
            "<DataArray type=\"Float64\" Name=\"{}\" format=\"ascii\">",
            name
        )?;
        self.indent += 1;
        self.write_indent()?;
        for (i, &v) in data.iter().enumerate() {
            write!(self.writer, "{:.10e}", v)?;
            if i < data.len() - 1 {
                write!(self.writer, " ")?;
            }
            if (i + 1) % 6 == 0 && i < data.len() - 1 {
                writeln!(self.writer)?;
                self.write_indent()?;
            }
        }
        writeln!(self.writer)?;
        self.indent -= 1;
        self.write_indent()?;
        writeln!(self.writer, "</DataArray>")?;
        Ok(())
    }

    fn write_data_array_i32(&mut self, name: &str, data: &[i32]) -> std::io::Result<()> {
        self.write_indent()?;
        writeln!(
            self.writer,
            "<DataArray type=\"Int32\" Name=\"{}\" format=\"ascii\">",
            name
        )?;
        self.indent += 1;
        self.write_indent()?;
        for (i, &v) in data.iter().enumerate() {
            write!(self.writer, "{}", v)?;
            if i < data.len() - 1 {
                write!(self.writer, " ")?;
            }
            if (i + 1) % 20 == 0 && i < data.len() - 1 {
                writeln!(self.writer)?;
                self.write_indent()?;
            }
        }
        writeln!(self.writer)?;
        self.indent -= 1;
        self.write_indent()?;
        writeln!(self.writer, "</DataArray>")?;
        Ok(())
    }

    /// Points in the (x, depth) plane, written as (x, depth, 0).
    fn write_points(&mut self, points: &[(f64, f64)]) -> std::io::Result<()> {
        self.start_element("Points", &[])?;
        self.write_indent()?;
        writeln!(
            self.writer,
            "<DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">"
        )?;
        self.indent += 1;
        for &(x, depth) in points {
            self.write_indent()?;
            writeln!(self.writer, "{:.10e} {:.10e} 0.0", x, depth)?;
        }
        self.indent -= 1;
        self.write_indent()?;
        writeln!(self.writer, "</DataArray>")?;
        self.end_element("Points")?;
        Ok(())
    }

    fn write_quads(&mut self, n_quads: usize) -> std::io::Result<()> {
        self.start_element("Cells", &[])?;

        // Four consecutive points per quad.
        let connectivity: Vec<i32> = (0..n_quads * 4).map(|v| v as i32).collect();
        self.write_data_array_i32("connectivity", &connectivity)?;

        let offsets: Vec<i32> = (1..=n_quads).map(|q| (q * 4) as i32).collect();
        self.write_data_array_i32("offsets", &offsets)?;

        // VTK_QUAD = 9
        self.write_indent()?;
        writeln!(
            self.writer,
            "<DataArray type=\"UInt8\" Name=\"types\" format=\"ascii\">"
        )?;
        self.indent += 1;
        self.write_indent()?;
        for q in 0..n_quads {
            write!(self.writer, "9")?;
            if q < n_quads - 1 {
                write!(self.writer, " ")?;
            }
        }
        writeln!(self.writer)?;
        self.indent -= 1;
        self.write_indent()?;
        writeln!(self.writer, "</DataArray>")?;

        self.end_element("Cells")?;
        Ok(())
    }
}

/// Write one Y-slice of the mesh as a VTU file.
///
/// `j_slice` is the 0-based row to render; `None` picks the middle row
/// (`ny / 2`). Cells must be the full emission-order list from
/// [`ModelGrid::cells`].
pub fn write_vtk_cross_section(
    path: impl AsRef<Path>,
    grid: &ModelGrid,
    cells: &[MeshCell],
    j_slice: Option<usize>,
) -> Result<(), VtkError> {
    let (_, ny, _) = grid.dims();
    let j = j_slice.unwrap_or(ny / 2);
    if j >= ny {
        return Err(VtkError::SliceOutOfRange { j, ny });
    }

    let slice: Vec<&MeshCell> = cells.iter().filter(|c| c.j == j + 1).collect();

    // Quad corners counter-clockwise in the (x, depth) plane.
    let mut points = Vec::with_capacity(slice.len() * 4);
    let mut layer_data = Vec::with_capacity(slice.len());
    let mut depth_data = Vec::with_capacity(slice.len());
    for cell in &slice {
        points.push((cell.x_min, cell.z_top));
        points.push((cell.x_max, cell.z_top));
        points.push((cell.x_max, cell.z_bottom));
        points.push((cell.x_min, cell.z_bottom));
        layer_data.push(cell.k as i32);
        depth_data.push(cell.z_top);
    }

    let file = File::create(path)?;
    let mut writer = VtkWriter::new(file);

    writer.write_header()?;
    writer.start_element("UnstructuredGrid", &[])?;
    writer.start_element(
        "Piece",
        &[
            ("NumberOfPoints", &points.len().to_string()),
            ("NumberOfCells", &slice.len().to_string()),
        ],
    )?;

    writer.write_points(&points)?;
    writer.write_quads(slice.len())?;

    writer.start_element("CellData", &[("Scalars", "layer")])?;
    writer.write_data_array_i32("layer", &layer_data)?;
    writer.write_data_array_f64("z_top", &depth_data)?;
    writer.end_element("CellData")?;

    writer.end_element("Piece")?;
    writer.end_element("UnstructuredGrid")?;
    writer.write_footer()?;

    Ok(())
}
