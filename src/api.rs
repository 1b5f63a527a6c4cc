//! High-level API for kernel ridge models
//!
//! This module provides the user-facing estimator façades: plain regression,
//! plain classification, and the augmented image-classification pipeline.
//! Builders hold the immutable hyperparameter set; `fit` consumes the
//! builder and returns a trained model, so an untrained model can never be
//! asked to predict.
//!
//! # Quick Start
//!
//! ```rust
//! use kridge::api::KernelRidgeClassifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
//! let y = [0, 0, 1, 1];
//!
//! let model = KernelRidgeClassifier::new()
//!     .with_c(0.01)
//!     .with_kernel_name("rbf")?
//!     .with_gamma(1.0)
//!     .fit(&x, &y)?;
//!
//! assert_eq!(model.predict(&x)?, vec![0, 0, 1, 1]);
//! # Ok(())
//! # }
//! ```

use crate::augment::augment_dataset;
use crate::core::{
    AugmentConfig, Dataset, FeatureExtractor, Result, RidgeConfig, RidgeError,
};
use crate::estimator::{RidgeEstimator, TrainedClassifier, TrainedRegressor};
use crate::features::HogExtractor;
use crate::kernel::KernelKind;
use crate::GrayImage;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Kernel ridge regressor with builder-style configuration
#[derive(Debug)]
pub struct KernelRidgeRegressor {
    config: RidgeConfig,
}

impl KernelRidgeRegressor {
    /// Create a regressor with default hyperparameters
    pub fn new() -> Self {
        Self {
            config: RidgeConfig::default(),
        }
    }

    /// Set regularization constant C
    pub fn with_c(mut self, c: f64) -> Self {
        self.config.c = c;
        self
    }

    /// Select a kernel from the registry
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Select a kernel by registry name; unknown names fail here, not at fit
    pub fn with_kernel_name(mut self, name: &str) -> Result<Self> {
        self.config.kernel = KernelKind::from_name(name)?;
        Ok(self)
    }

    /// Set the kernel scale parameter
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Fit on feature rows and real-valued targets
    pub fn fit(self, x: &[Vec<f64>], y: &[f64]) -> Result<TrainedRegressor> {
        RidgeEstimator::new(self.config).fit_regression(x.to_vec(), y)
    }

    /// Fit on any dataset, using its label column as the target
    pub fn fit_dataset<D: Dataset>(self, dataset: &D) -> Result<TrainedRegressor> {
        let x: Vec<Vec<f64>> = (0..dataset.len())
            .map(|i| dataset.get_sample(i).features)
            .collect();
        let y = dataset.get_labels();
        self.fit(&x, &y)
    }
}

impl Default for KernelRidgeRegressor {
    fn default() -> Self {
        Self::new()
    }
}

/// One-vs-all kernel ridge classifier with builder-style configuration
#[derive(Debug)]
pub struct KernelRidgeClassifier {
    config: RidgeConfig,
}

impl KernelRidgeClassifier {
    /// Create a classifier with default hyperparameters
    pub fn new() -> Self {
        Self {
            config: RidgeConfig::default(),
        }
    }

    /// Set regularization constant C
    pub fn with_c(mut self, c: f64) -> Self {
        self.config.c = c;
        self
    }

    /// Select a kernel from the registry
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Select a kernel by registry name; unknown names fail here, not at fit
    pub fn with_kernel_name(mut self, name: &str) -> Result<Self> {
        self.config.kernel = KernelKind::from_name(name)?;
        Ok(self)
    }

    /// Set the kernel scale parameter
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Fit on feature rows and integer class labels
    pub fn fit(self, x: &[Vec<f64>], y: &[i64]) -> Result<TrainedClassifier> {
        RidgeEstimator::new(self.config).fit_classification(x.to_vec(), y)
    }

    /// Fit on any dataset, rounding its label column to integer classes
    pub fn fit_dataset<D: Dataset>(self, dataset: &D) -> Result<TrainedClassifier> {
        let x: Vec<Vec<f64>> = (0..dataset.len())
            .map(|i| dataset.get_sample(i).features)
            .collect();
        let y: Vec<i64> = dataset
            .get_labels()
            .iter()
            .map(|&label| label.round() as i64)
            .collect();
        self.fit(&x, &y)
    }
}

impl Default for KernelRidgeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Image classifier with training-time augmentation and HOG features
///
/// During fit the dataset is augmented (flips, rotations), then HOG
/// descriptors are extracted and the one-vs-all classifier is trained on
/// them. Prediction extracts the same descriptors but never augments.
pub struct AugmentedHogClassifier {
    config: RidgeConfig,
    augment: AugmentConfig,
    extractor: HogExtractor,
    seed: Option<u64>,
}

impl AugmentedHogClassifier {
    /// Create an augmented classifier with default hyperparameters
    pub fn new() -> Self {
        Self {
            config: RidgeConfig::default(),
            augment: AugmentConfig::default(),
            extractor: HogExtractor::default(),
            seed: None,
        }
    }

    /// Set regularization constant C
    pub fn with_c(mut self, c: f64) -> Self {
        self.config.c = c;
        self
    }

    /// Select a kernel from the registry
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.config.kernel = kernel;
        self
    }

    /// Select a kernel by registry name; unknown names fail here, not at fit
    pub fn with_kernel_name(mut self, name: &str) -> Result<Self> {
        self.config.kernel = KernelKind::from_name(name)?;
        Ok(self)
    }

    /// Set the kernel scale parameter
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = gamma;
        self
    }

    /// Share of samples receiving a flipped copy
    pub fn with_flip_ratio(mut self, flip_ratio: f64) -> Self {
        self.augment.flip_ratio = flip_ratio;
        self
    }

    /// Number of rotated replica rounds
    pub fn with_rot_replicas(mut self, rot_replicas: usize) -> Self {
        self.augment.rot_replicas = rot_replicas;
        self
    }

    /// Share of samples receiving a rotated copy per round
    pub fn with_rot_ratio(mut self, rot_ratio: f64) -> Self {
        self.augment.rot_ratio = rot_ratio;
        self
    }

    /// Maximum rotation magnitude in degrees
    pub fn with_rot_angle(mut self, rot_angle: f64) -> Self {
        self.augment.rot_angle = rot_angle;
        self
    }

    /// Configure the HOG descriptor resolution
    pub fn with_hog(mut self, orientations: usize, cell_size: usize) -> Self {
        self.extractor = HogExtractor::new(orientations, cell_size);
        self
    }

    /// Seed the augmentation RNG for reproducible fits
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fit on raw images and integer class labels
    pub fn fit(self, images: &[GrayImage], y: &[i64]) -> Result<TrainedImageClassifier> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (images, labels) = augment_dataset(images, y, &self.augment, &mut rng)?;
        let features = self.extractor.transform(&images)?;
        let inner = RidgeEstimator::new(self.config).fit_classification(features, &labels)?;

        Ok(TrainedImageClassifier {
            extractor: self.extractor,
            inner,
        })
    }
}

impl Default for AugmentedHogClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained augmented classifier: HOG extraction plus the inner model
pub struct TrainedImageClassifier {
    extractor: HogExtractor,
    inner: TrainedClassifier,
}

impl TrainedImageClassifier {
    /// Predict labels for a batch of images, preserving input order
    pub fn predict(&self, images: &[GrayImage]) -> Result<Vec<i64>> {
        let features = self.extractor.transform(images)?;
        self.inner.predict(&features)
    }

    /// Sorted unique training labels
    pub fn classes(&self) -> &[i64] {
        self.inner.classes()
    }

    /// The descriptor extractor applied at fit and predict time
    pub fn extractor(&self) -> &HogExtractor {
        &self.extractor
    }

    /// The underlying feature-space classifier
    pub fn inner(&self) -> &TrainedClassifier {
        &self.inner
    }
}

/// Accuracy summary for classification predictions
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub correct: usize,
    pub total: usize,
}

impl ClassificationReport {
    /// Compare predictions against ground-truth labels
    pub fn new(predictions: &[i64], truth: &[i64]) -> Result<Self> {
        if predictions.len() != truth.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: truth.len(),
                actual: predictions.len(),
            });
        }

        let correct = predictions
            .iter()
            .zip(truth.iter())
            .filter(|(pred, actual)| pred == actual)
            .count();

        Ok(Self {
            correct,
            total: truth.len(),
        })
    }

    /// Fraction of correctly classified samples
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    /// Number of misclassified samples
    pub fn errors(&self) -> usize {
        self.total - self.correct
    }
}

/// Error summary for regression predictions
#[derive(Debug, Clone)]
pub struct RegressionReport {
    sum_squared: f64,
    sum_absolute: f64,
    n: usize,
}

impl RegressionReport {
    /// Compare predictions against ground-truth targets
    pub fn new(predictions: &[f64], truth: &[f64]) -> Result<Self> {
        if predictions.len() != truth.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: truth.len(),
                actual: predictions.len(),
            });
        }

        let mut sum_squared = 0.0;
        let mut sum_absolute = 0.0;
        for (pred, actual) in predictions.iter().zip(truth.iter()) {
            let diff = pred - actual;
            sum_squared += diff * diff;
            sum_absolute += diff.abs();
        }

        Ok(Self {
            sum_squared,
            sum_absolute,
            n: truth.len(),
        })
    }

    /// Mean squared error
    pub fn mse(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum_squared / self.n as f64
        }
    }

    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse().sqrt()
    }

    /// Mean absolute error
    pub fn mean_absolute_error(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum_absolute / self.n as f64
        }
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::data::CsvDataset;
    use std::path::Path;

    /// Train a classifier on a CSV file with the given C
    pub fn train_classifier_csv<P: AsRef<Path>>(path: P, c: f64) -> Result<TrainedClassifier> {
        let dataset = CsvDataset::from_file(path)?;
        KernelRidgeClassifier::new().with_c(c).fit_dataset(&dataset)
    }

    /// Train a regressor on a CSV file with the given C
    pub fn train_regressor_csv<P: AsRef<Path>>(path: P, c: f64) -> Result<TrainedRegressor> {
        let dataset = CsvDataset::from_file(path)?;
        KernelRidgeRegressor::new().with_c(c).fit_dataset(&dataset)
    }
}
