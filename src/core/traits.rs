//! Core traits for kernel ridge models

use crate::core::{Result, Sample};
use crate::GrayImage;

/// Dataset abstraction for efficient data access
pub trait Dataset: Send + Sync {
    /// Number of samples in the dataset
    fn len(&self) -> usize;

    /// Number of features (dimensionality)
    fn dim(&self) -> usize;

    /// Get a single sample by index
    ///
    /// # Panics
    /// Panics if index >= len()
    fn get_sample(&self, i: usize) -> Sample;

    /// Get multiple samples efficiently
    fn get_batch(&self, indices: &[usize]) -> Vec<Sample> {
        indices.iter().map(|&i| self.get_sample(i)).collect()
    }

    /// Get all labels as a vector
    fn get_labels(&self) -> Vec<f64>;

    /// Check if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Feature-extraction collaborator: maps raw images to dense feature vectors
///
/// Implementations must be deterministic and side-effect free so the same
/// transform can run during training and prediction.
pub trait FeatureExtractor: Send + Sync {
    /// Transform a batch of images into feature vectors, preserving order
    fn transform(&self, images: &[GrayImage]) -> Result<Vec<Vec<f64>>>;
}
