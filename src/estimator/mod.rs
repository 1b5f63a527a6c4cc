//! Fit pipeline and trained models
//!
//! This module wires the kernel, the label encoding, and the ridge solver
//! into complete training runs, and defines the trained-model types that
//! carry the resulting dual coefficients into prediction.

use crate::core::{Result, RidgeConfig, RidgeError};
use crate::kernel::GramKernel;
use crate::labels::LabelBinarizer;
use crate::solver::{solve_ridge, solve_ridge_vector};
use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use std::time::Instant;

/// Closed-form trainer shared by the regression and classification façades
pub struct RidgeEstimator {
    config: RidgeConfig,
}

impl RidgeEstimator {
    /// Create an estimator with the given hyperparameters
    pub fn new(config: RidgeConfig) -> Self {
        Self { config }
    }

    /// Get the estimator configuration
    pub fn config(&self) -> &RidgeConfig {
        &self.config
    }

    /// Build the kernel over the training set and compute its Gram matrix
    ///
    /// The Gram matrix is the O(N²·d) step that dominates fit cost, so it is
    /// computed exactly once per fit and its wall-clock time is logged.
    fn build_gram(&self, features: Vec<Vec<f64>>) -> Result<(GramKernel, DMatrix<f64>)> {
        if self.config.c <= 0.0 {
            return Err(RidgeError::InvalidParameter(format!(
                "regularization constant must be positive, got {}",
                self.config.c
            )));
        }

        let kernel = GramKernel::new(features, self.config.kernel, self.config.gamma)?;
        let start = Instant::now();
        let gram = kernel.similarity_matrix();
        info!(
            "Similarity matrix ({n}x{n}, {kind}) computed in {elapsed:.2?}",
            n = kernel.len(),
            kind = kernel.kind().name(),
            elapsed = start.elapsed()
        );
        Ok((kernel, gram))
    }

    /// Fit a regressor: one solve, one coefficient vector
    pub fn fit_regression(&self, features: Vec<Vec<f64>>, y: &[f64]) -> Result<TrainedRegressor> {
        if features.len() != y.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: features.len(),
                actual: y.len(),
            });
        }

        let (kernel, gram) = self.build_gram(features)?;
        let alpha = solve_ridge_vector(gram, self.config.c, &DVector::from_column_slice(y))?;
        debug!("Solved regression system with {} coefficients", alpha.len());

        Ok(TrainedRegressor { kernel, alpha })
    }

    /// Fit a classifier: one solve per class against a shared factorization
    pub fn fit_classification(
        &self,
        features: Vec<Vec<f64>>,
        y: &[i64],
    ) -> Result<TrainedClassifier> {
        if features.len() != y.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: features.len(),
                actual: y.len(),
            });
        }

        let (classes, targets) = LabelBinarizer::new().fit_transform(y)?;
        let (kernel, gram) = self.build_gram(features)?;

        // The regularized system is identical across classes, so all columns
        // share one Cholesky factorization inside solve_ridge.
        let coefficients = solve_ridge(gram, self.config.c, &targets)?;
        debug!(
            "Solved {} one-vs-all systems of size {}",
            classes.len(),
            kernel.len()
        );

        Ok(TrainedClassifier {
            kernel,
            // Stored as (num_classes, N): row i holds the coefficients of the
            // i-th sorted class.
            alpha: coefficients.transpose(),
            classes,
        })
    }
}

/// Trained kernel ridge regressor
#[derive(Debug)]
pub struct TrainedRegressor {
    kernel: GramKernel,
    alpha: DVector<f64>,
}

impl TrainedRegressor {
    /// Rebuild a trained model from stored parts (persistence path)
    pub(crate) fn from_parts(kernel: GramKernel, alpha: DVector<f64>) -> Result<Self> {
        if alpha.len() != kernel.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: kernel.len(),
                actual: alpha.len(),
            });
        }
        Ok(Self { kernel, alpha })
    }

    /// Predict a single sample: dot(alpha, similarity(x))
    pub fn predict_one(&self, x: &[f64]) -> Result<f64> {
        let similarity = self.kernel.similarity(x)?;
        Ok(self.alpha.dot(&similarity))
    }

    /// Predict a batch of samples, preserving input order
    pub fn predict(&self, xs: &[Vec<f64>]) -> Result<Vec<f64>> {
        xs.iter().map(|x| self.predict_one(x)).collect()
    }

    /// The kernel bound to the training set
    pub fn kernel(&self) -> &GramKernel {
        &self.kernel
    }

    /// Dual coefficients, one per training sample
    pub fn alpha(&self) -> &DVector<f64> {
        &self.alpha
    }
}

/// Trained one-vs-all kernel ridge classifier
#[derive(Debug)]
pub struct TrainedClassifier {
    kernel: GramKernel,
    /// (num_classes, N); row i belongs to `classes[i]`
    alpha: DMatrix<f64>,
    /// Sorted unique training labels
    classes: Vec<i64>,
}

impl TrainedClassifier {
    /// Rebuild a trained model from stored parts (persistence path)
    pub(crate) fn from_parts(
        kernel: GramKernel,
        alpha: DMatrix<f64>,
        classes: Vec<i64>,
    ) -> Result<Self> {
        if alpha.ncols() != kernel.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: kernel.len(),
                actual: alpha.ncols(),
            });
        }
        if alpha.nrows() != classes.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: classes.len(),
                actual: alpha.nrows(),
            });
        }
        if classes.len() < 2 {
            return Err(RidgeError::InvalidDataset(
                "classification requires at least 2 distinct labels".to_string(),
            ));
        }
        Ok(Self {
            kernel,
            alpha,
            classes,
        })
    }

    /// Sorted unique training labels; score index i belongs to `classes()[i]`
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Per-class scores dot(alpha_c, similarity(x)) in sorted class order
    pub fn decision_function(&self, x: &[f64]) -> Result<DVector<f64>> {
        let similarity = self.kernel.similarity(x)?;
        Ok(&self.alpha * similarity)
    }

    /// Predict a single sample's label
    ///
    /// Returns the class with the highest score; equal scores break toward
    /// the lowest sorted class index (strictly-greater max scan).
    pub fn predict_one(&self, x: &[f64]) -> Result<i64> {
        let scores = self.decision_function(x)?;
        let mut best = 0;
        for i in 1..scores.len() {
            if scores[i] > scores[best] {
                best = i;
            }
        }
        Ok(self.classes[best])
    }

    /// Predict a batch of samples, preserving input order
    pub fn predict(&self, xs: &[Vec<f64>]) -> Result<Vec<i64>> {
        xs.iter().map(|x| self.predict_one(x)).collect()
    }

    /// The kernel bound to the training set
    pub fn kernel(&self) -> &GramKernel {
        &self.kernel
    }

    /// Dual coefficients, one row per sorted class
    pub fn alpha(&self) -> &DMatrix<f64> {
        &self.alpha
    }
}
