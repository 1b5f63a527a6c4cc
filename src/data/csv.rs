//! CSV format dataset implementation
//!
//! Supports loading datasets from CSV files where:
//! - The last column is the label
//! - All other columns are features
//! - First row can be headers (automatically detected)

use crate::core::{Dataset, Result, RidgeError, Sample};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dataset implementation for CSV files with dense feature rows
#[derive(Debug, Clone)]
pub struct CsvDataset {
    samples: Vec<Sample>,
    dimensions: usize,
}

impl CsvDataset {
    /// Load a dataset from a CSV file
    ///
    /// The last column is assumed to be the label. Headers are automatically
    /// detected if present.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(RidgeError::IoError)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from a reader, auto-detecting a header row
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a dataset from a reader with an explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut samples: Vec<Sample> = Vec::new();
        let mut first_data_line = true;

        for line in reader.lines() {
            let line = line.map_err(RidgeError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if first_data_line {
                first_data_line = false;
                if auto_detect_header && is_header_line(line) {
                    continue;
                }
            }

            let sample = parse_data_line(line)?;
            if let Some(previous) = samples.first() {
                if sample.dim() != previous.dim() {
                    return Err(RidgeError::DimensionMismatch {
                        expected: previous.dim(),
                        actual: sample.dim(),
                    });
                }
            }
            samples.push(sample);
        }

        if samples.is_empty() {
            return Err(RidgeError::EmptyDataset);
        }

        let dimensions = samples[0].dim();
        Ok(CsvDataset {
            samples,
            dimensions,
        })
    }

    /// Feature rows without labels
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| s.features.clone()).collect()
    }
}

impl Dataset for CsvDataset {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn dim(&self) -> usize {
        self.dimensions
    }

    fn get_sample(&self, i: usize) -> Sample {
        self.samples[i].clone()
    }

    fn get_labels(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.label).collect()
    }
}

/// Check whether a line looks like a header row
///
/// A line is treated as a header when most of its fields fail to parse as
/// numbers.
fn is_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 2 {
        return false;
    }

    let non_numeric = fields
        .iter()
        .filter(|field| field.trim().parse::<f64>().is_err())
        .count();
    non_numeric * 2 > fields.len()
}

/// Parse one data row: features followed by the label column
fn parse_data_line(line: &str) -> Result<Sample> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 2 {
        return Err(RidgeError::ParseError(format!(
            "expected at least one feature column and a label, got: {line}"
        )));
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        let value = field.trim().parse::<f64>().map_err(|_| {
            RidgeError::ParseError(format!("invalid numeric value '{}'", field.trim()))
        })?;
        values.push(value);
    }

    let label = values.pop().expect("row has at least two fields");
    Ok(Sample::new(values, label))
}
