//! Integration tests for the survey-to-solver pipelines.
//!
//! These tests verify:
//! - End-to-end data conversion (file in, two files out, SI units)
//! - Schema failures leaving no output behind
//! - Mesh generation from scattered samples (grid conformance, clamping,
//!   file format and ordering)
//! - The diagnostic cross-section render

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::tempdir;

use tomoprep::pipeline::{GridConfig, convert_survey_data, create_model_grid};
use tomoprep::{PipelineError, SurveyFileError};

fn write_file(path: &Path, content: &str) {
    let mut file = fs::File::create(path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn parse_line(line: &str) -> Vec<f64> {
    line.split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect()
}

#[test]
fn test_single_record_conversion() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(&input, "X,Y,Topography,Grav,Mag\n0,0,50,1.0,2.0\n");

    let summary = convert_survey_data(&input, dir.path()).unwrap();
    assert_eq!(summary.n_records, 1);

    let gravity = fs::read_to_string(dir.path().join("gravity_data.txt")).unwrap();
    let lines: Vec<&str> = gravity.lines().collect();
    assert_eq!(lines[0], "1");
    assert_eq!(parse_line(lines[1]), vec![0.0, 0.0, -50.0, 1e-5]);

    let magnetic = fs::read_to_string(dir.path().join("magnetic_data.txt")).unwrap();
    let lines: Vec<&str> = magnetic.lines().collect();
    assert_eq!(lines[0], "1");
    assert_eq!(parse_line(lines[1]), vec![0.0, 0.0, -50.0, 2e-9]);
}

#[test]
fn test_conversion_preserves_input_order() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(
        &input,
        "X,Y,Topography,Grav,Mag\n\
         0,0,100,1.0,10.0\n\
         1000,0,90,2.0,20.0\n\
         2000,0,80,3.0,30.0\n",
    );

    let summary = convert_survey_data(&input, dir.path()).unwrap();
    assert_eq!(summary.n_records, 3);

    let gravity = fs::read_to_string(summary.gravity_path).unwrap();
    let values: Vec<f64> = gravity
        .lines()
        .skip(1)
        .map(|l| parse_line(l)[3])
        .collect();
    let expected: Vec<f64> = [1.0f64, 2.0, 3.0].iter().map(|g| g * 1e-5).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(&input, "X,Y,Topography,Grav\n0,0,50,1.0\n");

    let err = convert_survey_data(&input, dir.path()).unwrap_err();
    match err {
        PipelineError::Survey(SurveyFileError::MissingColumns { missing, required }) => {
            assert_eq!(missing, vec!["Mag".to_string()]);
            assert_eq!(
                required,
                vec!["X", "Y", "Topography", "Grav", "Mag"]
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert!(!dir.path().join("gravity_data.txt").exists());
    assert!(!dir.path().join("magnetic_data.txt").exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let err = convert_survey_data(&dir.path().join("absent.csv"), dir.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Survey(SurveyFileError::Io(_))
    ));
}

#[test]
fn test_grid_from_two_samples() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(
        &input,
        "X,Y,Topography,Grav,Mag\n0,0,100,1.0,2.0\n1000,0,80,1.0,2.0\n",
    );
    let output = dir.path().join("model_grid.txt");

    let summary = create_model_grid(&input, &output, &GridConfig::default()).unwrap();
    assert_eq!((summary.nx, summary.ny, summary.nz), (2, 1, 20));
    assert_eq!(summary.n_cells, 40);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "40");
    assert_eq!(lines.len(), 41);

    // k=1 layer, peak cell: edges from the two distinct x coordinates padded
    // by dx/2, top clamped at the surface.
    let first = parse_line(lines[1]);
    assert_eq!(first[..6], [-500.0, 500.0, -500.0, 500.0, 0.0, 100.0]);
    assert_eq!(first[6..], [0.0, 1.0, 1.0, 1.0]);

    // Neighbor cell is 20 m lower, so its layer stack starts 20 m deeper.
    let second = parse_line(lines[2]);
    assert_eq!(second[..6], [500.0, 1500.0, -500.0, 500.0, 20.0, 120.0]);
    assert_eq!(second[6..], [0.0, 2.0, 1.0, 1.0]);
}

#[test]
fn test_grid_duplicate_coordinates_collapse() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    // Two stations repeat an x coordinate; only two distinct x values remain.
    write_file(
        &input,
        "X,Y,Topography\n0,0,100\n0,1000,95\n1000,0,80\n1000,1000,85\n",
    );
    let output = dir.path().join("model_grid.txt");

    let config = GridConfig::new().with_depth(300.0);
    let summary = create_model_grid(&input, &output, &config).unwrap();
    assert_eq!((summary.nx, summary.ny, summary.nz), (2, 2, 3));
    assert_eq!(summary.n_cells, 12);
}

#[test]
fn test_grid_output_ordering_is_k_major() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(
        &input,
        "X,Y,Topography\n0,0,10\n1000,0,10\n0,1000,10\n1000,1000,10\n",
    );
    let output = dir.path().join("model_grid.txt");

    let config = GridConfig::new().with_depth(200.0);
    let summary = create_model_grid(&input, &output, &config).unwrap();
    let (nx, ny) = (summary.nx, summary.ny);

    let content = fs::read_to_string(&output).unwrap();
    for (idx, line) in content.lines().skip(1).enumerate() {
        let fields = parse_line(line);
        let (i, j, k) = (fields[7] as usize, fields[8] as usize, fields[9] as usize);
        let expect_k = idx / (nx * ny) + 1;
        let rem = idx % (nx * ny);
        let expect_j = rem / nx + 1;
        let expect_i = rem % nx + 1;
        assert_eq!((i, j, k), (expect_i, expect_j, expect_k));
    }
}

#[test]
fn test_grid_surface_clamp_holds_in_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    // Rough terrain with an 80 m swing.
    write_file(
        &input,
        "X,Y,Topography\n0,0,100\n500,0,20\n1500,0,90\n3000,0,55\n",
    );
    let output = dir.path().join("model_grid.txt");

    let config = GridConfig::new().with_depth(500.0);
    create_model_grid(&input, &output, &config).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    for line in content.lines().skip(1) {
        let fields = parse_line(line);
        let (z_top, z_bottom) = (fields[4], fields[5]);
        // Depth-positive-down: tops never rise above the normalized peak.
        assert!(z_top >= -1e-6, "z_top {} above the peak", z_top);
        assert!(z_bottom > z_top);
    }
}

#[test]
fn test_grid_with_cross_section() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(
        &input,
        "X,Y,Topography\n0,0,100\n1000,0,80\n0,1000,90\n1000,1000,70\n",
    );
    let output = dir.path().join("model_grid.txt");
    let vtu = dir.path().join("cross_section.vtu");

    let config = GridConfig::new()
        .with_depth(300.0)
        .with_cross_section(&vtu);
    let summary = create_model_grid(&input, &output, &config).unwrap();
    assert_eq!(summary.n_cells, 12);

    let content = fs::read_to_string(&vtu).unwrap();
    assert!(content.contains("<VTKFile type=\"UnstructuredGrid\""));
    // nx * nz quads in the rendered slice.
    assert!(content.contains("NumberOfCells=\"6\""));
}

#[test]
fn test_grid_rejects_empty_data() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.csv");
    write_file(&input, "X,Y,Topography\n");
    let output = dir.path().join("model_grid.txt");

    let err = create_model_grid(&input, &output, &GridConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Survey(SurveyFileError::Empty)
    ));
    assert!(!output.exists());
}
