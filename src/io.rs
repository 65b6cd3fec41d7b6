//! Whitespace-delimited text persistence.
//!
//! ## Purpose
//!
//! This module reads and writes the simple column text format used for ACE
//! data sets: one row per observation, the first column the response (or its
//! transform), the remaining columns the predictors (or their transforms).
//!
//! ## Key concepts
//!
//! * **Column orientation**: Files are row-per-observation on disk but the
//!   in-memory representation is column-per-predictor.
//! * **Fixed width**: Values are written in fixed-width scientific notation,
//!   so reading a written file reproduces column count and row order.
//!
//! ## Non-goals
//!
//! * This module does not handle CSV, headers, or comments.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::AceResult;
use crate::primitives::errors::AceError;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::vec::Vec;

// ============================================================================
// Reading
// ============================================================================

/// Read column data from a text file.
///
/// The first column is the dependent variable, the others independent.
/// Whitespace delimited; blank lines are skipped.
///
/// # Errors
///
/// * [`AceError::Io`] on file errors or ragged rows.
/// * [`AceError::Parse`] when a field is not a number.
/// * [`AceError::EmptyInput`] when the file holds no data rows.
pub fn read_column_data<T, P>(path: P) -> Result<(Vec<Vec<T>>, Vec<T>), AceError>
where
    T: Float,
    P: AsRef<Path>,
{
    let file = File::open(path).map_err(|e| AceError::Io(e.to_string()))?;
    let reader = BufReader::new(file);

    let mut columns: Vec<Vec<T>> = Vec::new();
    let mut rows = 0;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AceError::Io(e.to_string()))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if columns.is_empty() {
            columns = vec![Vec::new(); fields.len()];
        } else if fields.len() != columns.len() {
            return Err(AceError::Io(format!(
                "line {}: expected {} fields, got {}",
                line_idx + 1,
                columns.len(),
                fields.len()
            )));
        }

        for (column, field) in columns.iter_mut().zip(fields.iter()) {
            let value: f64 = field.parse().map_err(|_| AceError::Parse {
                line: line_idx + 1,
                field: (*field).into(),
            })?;
            column.push(T::from(value).unwrap_or_else(T::nan));
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(AceError::EmptyInput);
    }

    let y = columns.remove(0);
    Ok((columns, y))
}

// ============================================================================
// Writing
// ============================================================================

/// Write a training data set, response first.
pub fn write_input<T, P>(path: P, x: &[Vec<T>], y: &[T]) -> Result<(), AceError>
where
    T: Float,
    P: AsRef<Path>,
{
    write_columns(path, y, x)
}

/// Write fitted transforms, theta first, then each phi column.
pub fn write_transforms<T, P>(path: P, result: &AceResult<T>) -> Result<(), AceError>
where
    T: Float,
    P: AsRef<Path>,
{
    write_columns(path, &result.y_transform, &result.x_transforms)
}

/// Row-per-observation writer shared by both outputs.
fn write_columns<T, P>(path: P, first: &[T], rest: &[Vec<T>]) -> Result<(), AceError>
where
    T: Float,
    P: AsRef<Path>,
{
    let file = File::create(path).map_err(|e| AceError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    for i in 0..first.len() {
        write_field(&mut writer, first[i])?;
        for column in rest {
            write!(writer, " ").map_err(|e| AceError::Io(e.to_string()))?;
            write_field(&mut writer, column[i])?;
        }
        writeln!(writer).map_err(|e| AceError::Io(e.to_string()))?;
    }

    writer.flush().map_err(|e| AceError::Io(e.to_string()))
}

fn write_field<T: Float, W: Write>(writer: &mut W, value: T) -> Result<(), AceError> {
    write!(writer, "{:>15.8E}", value.to_f64().unwrap_or(f64::NAN))
        .map_err(|e| AceError::Io(e.to_string()))
}
