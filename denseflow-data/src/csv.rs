// denseflow-data/src/csv.rs

use crate::error::DataError;
use denseflow_core::Tensor;
use log::debug;
use std::fs;
use std::path::Path;

/// Parses comma-separated numeric rows.
///
/// Blank lines are skipped. Every remaining row must have as many columns as
/// the first one. Row and column numbers in errors are 1-based and count
/// lines of the input, blank ones included.
///
/// # Example
/// ```
/// use denseflow_data::parse_csv;
/// let rows = parse_csv("1,2\n3,4\n").unwrap();
/// assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// ```
pub fn parse_csv(text: &str) -> Result<Vec<Vec<f64>>, DataError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row_number = line_idx + 1;
        let row = line
            .split(',')
            .enumerate()
            .map(|(col_idx, cell)| {
                let cell = cell.trim();
                cell.parse::<f64>().map_err(|_| DataError::Parse {
                    row: row_number,
                    column: col_idx + 1,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, DataError>>()?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(DataError::RaggedRow {
                    row: row_number,
                    expected: first.len(),
                    actual: row.len(),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Reads and parses a CSV file with [`parse_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, DataError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_csv(&text)?;
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Turns each row into a `[1, features]` tensor.
pub fn rows_to_tensors(rows: &[Vec<f64>]) -> Result<Vec<Tensor>, DataError> {
    rows.iter()
        .map(|row| Ok(Tensor::new(row.clone(), vec![1, row.len()])?))
        .collect()
}

/// Stacks rows into one `[rows, features]` tensor.
///
/// # Errors
/// `DataError::Empty` for no rows, `DataError::RaggedRow` for rows of
/// different lengths.
pub fn rows_to_matrix(rows: &[Vec<f64>]) -> Result<Tensor, DataError> {
    let width = rows.first().map(Vec::len).ok_or(DataError::Empty)?;
    let mut data = Vec::with_capacity(rows.len() * width);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(DataError::RaggedRow {
                row: i + 1,
                expected: width,
                actual: row.len(),
            });
        }
        data.extend_from_slice(row);
    }
    Ok(Tensor::new(data, vec![rows.len(), width])?)
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;
