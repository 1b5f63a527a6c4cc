//! One-vs-all label encoding
//!
//! Maps each distinct class label to a ±1 target column. Class ordering is
//! the sorted order of unique training labels, and every consumer of the
//! encoding (coefficient storage, argmax prediction) indexes classes by that
//! sorted rank.

use crate::core::{Result, RidgeError};
use nalgebra::DMatrix;

/// Encoder producing one binary target column per class
#[derive(Debug, Clone, Copy)]
pub struct LabelBinarizer {
    pos_label: f64,
    neg_label: f64,
}

impl Default for LabelBinarizer {
    /// The {+1, -1} convention used by the one-vs-all solves
    fn default() -> Self {
        Self {
            pos_label: 1.0,
            neg_label: -1.0,
        }
    }
}

impl LabelBinarizer {
    /// Create a binarizer with the {+1, -1} convention
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the sorted class set and build the N×num_classes target matrix
    ///
    /// Column j holds the one-vs-all targets for the j-th sorted class:
    /// +1 where the sample carries that label, -1 everywhere else.
    pub fn fit_transform(&self, labels: &[i64]) -> Result<(Vec<i64>, DMatrix<f64>)> {
        if labels.is_empty() {
            return Err(RidgeError::EmptyDataset);
        }

        let mut classes = labels.to_vec();
        classes.sort_unstable();
        classes.dedup();

        if classes.len() < 2 {
            return Err(RidgeError::InvalidDataset(
                "classification requires at least 2 distinct labels".to_string(),
            ));
        }

        let targets = DMatrix::from_fn(labels.len(), classes.len(), |i, j| {
            if labels[i] == classes[j] {
                self.pos_label
            } else {
                self.neg_label
            }
        });

        Ok((classes, targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_sorted_unique() {
        let (classes, targets) = LabelBinarizer::new()
            .fit_transform(&[2, 0, 1, 2, 0])
            .unwrap();

        assert_eq!(classes, vec![0, 1, 2]);
        assert_eq!(targets.nrows(), 5);
        assert_eq!(targets.ncols(), 3);
    }

    #[test]
    fn test_target_values() {
        let (classes, targets) = LabelBinarizer::new().fit_transform(&[1, 0, 1]).unwrap();
        assert_eq!(classes, vec![0, 1]);

        // Row 0 carries label 1 -> column 1 positive
        assert_eq!(targets[(0, 0)], -1.0);
        assert_eq!(targets[(0, 1)], 1.0);
        // Row 1 carries label 0 -> column 0 positive
        assert_eq!(targets[(1, 0)], 1.0);
        assert_eq!(targets[(1, 1)], -1.0);
    }

    #[test]
    fn test_one_positive_per_row() {
        let (_, targets) = LabelBinarizer::new()
            .fit_transform(&[5, 9, 5, 7, 9, 7])
            .unwrap();

        for i in 0..targets.nrows() {
            let positives = (0..targets.ncols())
                .filter(|&j| targets[(i, j)] == 1.0)
                .count();
            assert_eq!(positives, 1);
        }
    }

    #[test]
    fn test_non_contiguous_labels() {
        let (classes, targets) = LabelBinarizer::new()
            .fit_transform(&[42, 3, 7, 3])
            .unwrap();

        assert_eq!(classes, vec![3, 7, 42]);
        assert_eq!(targets[(0, 2)], 1.0);
        assert_eq!(targets[(1, 0)], 1.0);
        assert_eq!(targets[(2, 1)], 1.0);
    }

    #[test]
    fn test_single_class_rejected() {
        let err = LabelBinarizer::new().fit_transform(&[1, 1, 1]).unwrap_err();
        assert!(matches!(err, RidgeError::InvalidDataset(_)));
    }

    #[test]
    fn test_empty_labels_rejected() {
        let err = LabelBinarizer::new().fit_transform(&[]).unwrap_err();
        assert!(matches!(err, RidgeError::EmptyDataset));
    }
}
