//! Tests for whitespace-delimited text persistence.

use std::fs;
use std::io::Write;

use approx::assert_relative_eq;
use tempfile::NamedTempFile;

use ace_rs::prelude::*;

// ============================================================================
// Round-Trip Tests
// ============================================================================

/// Test that written input data reads back with identical shape and values.
#[test]
fn test_input_round_trip() {
    let x = vec![
        vec![1.5, 2.25, 3.125, 4.0],
        vec![-0.5, 0.75, -1.25, 2.5],
    ];
    let y = vec![10.0, 20.5, 30.25, 40.125];

    let file = NamedTempFile::new().unwrap();
    write_input(file.path(), &x, &y).unwrap();
    let (x_read, y_read): (Vec<Vec<f64>>, Vec<f64>) = read_column_data(file.path()).unwrap();

    assert_eq!(x_read.len(), 2);
    for (column, original) in x_read.iter().zip(x.iter()) {
        for (a, b) in column.iter().zip(original.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-7);
        }
    }
    for (a, b) in y_read.iter().zip(y.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-7);
    }
}

/// Test that written transforms read back, theta first.
#[test]
fn test_transform_round_trip() {
    let x: Vec<f64> = (0..30).map(|i| i as f64 * 0.3).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v + 1.0).sqrt()).collect();

    let ace = Ace::new().build().unwrap();
    let result = ace.fit(&[x], &y).unwrap();

    let file = NamedTempFile::new().unwrap();
    write_transforms(file.path(), &result).unwrap();
    let (phi_read, theta_read): (Vec<Vec<f64>>, Vec<f64>) =
        read_column_data(file.path()).unwrap();

    assert_eq!(phi_read.len(), 1);
    for (a, b) in theta_read.iter().zip(result.y_transform.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-7);
    }
    for (a, b) in phi_read[0].iter().zip(result.x_transforms[0].iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-7);
    }
}

/// Test that a model refitted from reread data evaluates close to the
/// original model.
#[test]
fn test_model_survives_round_trip() {
    let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
    let y: Vec<f64> = x.iter().map(|&v| (v + 1.0).ln()).collect();
    let columns = vec![x];

    let ace = Ace::new().build().unwrap();
    let (_, model) = ace.fit_model(&columns, &y).unwrap();

    let file = NamedTempFile::new().unwrap();
    write_input(file.path(), &columns, &y).unwrap();
    let (x_read, y_read): (Vec<Vec<f64>>, Vec<f64>) = read_column_data(file.path()).unwrap();
    let (_, model_read) = ace.fit_model(&x_read, &y_read).unwrap();

    for query in [0.5, 3.0, 7.5] {
        let a = model.eval(&[query]).unwrap();
        let b = model_read.eval(&[query]).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-4);
    }
}

// ============================================================================
// Format Tests
// ============================================================================

/// Test that blank lines are skipped while reading.
#[test]
fn test_blank_lines_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0 2.0").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "3.0 4.0").unwrap();
    file.flush().unwrap();

    let (x, y): (Vec<Vec<f64>>, Vec<f64>) = read_column_data(file.path()).unwrap();
    assert_eq!(y, vec![1.0, 3.0]);
    assert_eq!(x, vec![vec![2.0, 4.0]]);
}

/// Test that a response-only file yields zero predictor columns.
#[test]
fn test_single_column_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0").unwrap();
    writeln!(file, "2.0").unwrap();
    file.flush().unwrap();

    let (x, y): (Vec<Vec<f64>>, Vec<f64>) = read_column_data(file.path()).unwrap();
    assert!(x.is_empty());
    assert_eq!(y, vec![1.0, 2.0]);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that a non-numeric field reports its line and content.
#[test]
fn test_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0 2.0").unwrap();
    writeln!(file, "3.0 oops").unwrap();
    file.flush().unwrap();

    let err = read_column_data::<f64, _>(file.path()).unwrap_err();
    assert_eq!(
        err,
        AceError::Parse {
            line: 2,
            field: "oops".into(),
        }
    );
}

/// Test that a ragged row is rejected.
#[test]
fn test_ragged_row_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1.0 2.0").unwrap();
    writeln!(file, "3.0").unwrap();
    file.flush().unwrap();

    let err = read_column_data::<f64, _>(file.path()).unwrap_err();
    assert!(matches!(err, AceError::Io(_)));
}

/// Test that a file with no data rows is rejected.
#[test]
fn test_empty_file_rejected() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "\n\n").unwrap();

    let err = read_column_data::<f64, _>(file.path()).unwrap_err();
    assert_eq!(err, AceError::EmptyInput);
}

/// Test that a missing file surfaces as an I/O error.
#[test]
fn test_missing_file() {
    let err = read_column_data::<f64, _>("/nonexistent/ace-data.txt").unwrap_err();
    assert!(matches!(err, AceError::Io(_)));
}
