//! Command-line front end for the survey-to-solver preparation pipelines.
//!
//! ```bash
//! tomoprep data survey.csv --output-dir processed/
//! tomoprep grid survey.csv --output model_grid.txt --dx 1000 --dz 100 \
//!     --depth 2000 --cross-section slice.vtu
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tomoprep::pipeline::{GridConfig, convert_survey_data, create_model_grid};

#[derive(Parser)]
#[command(name = "tomoprep", about = "Prepare survey data for joint inversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a survey file into gravity and magnetic data files (SI units)
    Data {
        /// Survey table with X, Y, Topography, Grav, Mag columns
        input: PathBuf,

        /// Directory for gravity_data.txt and magnetic_data.txt
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Build the topography-conforming voxel model grid
    Grid {
        /// Survey table with X, Y, Topography columns
        input: PathBuf,

        /// Model grid output path
        #[arg(short, long, default_value = "model_grid.txt")]
        output: PathBuf,

        /// Nominal cell width in x (m)
        #[arg(long, default_value_t = 1000.0)]
        dx: f64,

        /// Nominal cell height in y (m)
        #[arg(long, default_value_t = 1000.0)]
        dy: f64,

        /// Depth layer thickness (m)
        #[arg(long, default_value_t = 100.0)]
        dz: f64,

        /// Total depth below the topographic surface (m)
        #[arg(long, default_value_t = 2000.0)]
        depth: f64,

        /// Write a diagnostic cross-section VTU of the middle Y-slice
        #[arg(long)]
        cross_section: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> Result<(), tomoprep::PipelineError> {
    match cli.command {
        Command::Data { input, output_dir } => {
            let summary = convert_survey_data(&input, &output_dir)?;
            println!("Data points: {}", summary.n_records);
            println!("Gravity data: {}", summary.gravity_path.display());
            println!("Magnetic data: {}", summary.magnetic_path.display());
            println!("Add to the solver parameter file:");
            println!("forward.data.grav.nData = {}", summary.n_records);
            println!("forward.data.magn.nData = {}", summary.n_records);
        }
        Command::Grid {
            input,
            output,
            dx,
            dy,
            dz,
            depth,
            cross_section,
        } => {
            let mut config = GridConfig::new()
                .with_cell_size(dx, dy)
                .with_layer_thickness(dz)
                .with_depth(depth);
            if let Some(path) = cross_section {
                config = config.with_cross_section(path);
            }

            let summary = create_model_grid(&input, &output, &config)?;
            println!(
                "Calculated nx: {}, ny: {}, nz: {}",
                summary.nx, summary.ny, summary.nz
            );
            println!("Total elements (nx*ny*nz): {}", summary.n_cells);
            println!("Model grid saved to {}", summary.path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
