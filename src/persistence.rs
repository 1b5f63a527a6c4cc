//! Model serialization and persistence
//!
//! Saves and loads trained models for the CLI application and other
//! scenarios where a fitted model outlives the process. The snapshot stores
//! the training features, the dual coefficients, and the kernel registry
//! name, which together are enough to rebuild the full predictor.

use crate::core::{Result, RidgeError};
use crate::estimator::{TrainedClassifier, TrainedRegressor};
use crate::kernel::{GramKernel, KernelKind};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Which estimator produced a saved model
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ModelTask {
    Regression,
    Classification,
}

/// Serializable snapshot of a trained model
#[derive(Serialize, Deserialize)]
pub struct SavedModel {
    /// Estimator variant
    pub task: ModelTask,
    /// Kernel registry name
    pub kernel: String,
    /// Kernel scale parameter
    pub gamma: f64,
    /// Training feature rows the kernel is bound to
    pub training_features: Vec<Vec<f64>>,
    /// Coefficient rows: one row for regression, one per sorted class otherwise
    pub alpha: Vec<Vec<f64>>,
    /// Sorted class labels (classification only)
    pub classes: Option<Vec<i64>>,
    /// Model metadata
    pub metadata: ModelMetadata,
}

/// Model metadata for tracking and validation
#[derive(Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Library version used to create the model
    pub library_version: String,
    /// Number of training samples
    pub n_samples: usize,
    /// Feature dimensionality
    pub n_features: usize,
    /// Creation timestamp
    pub created_at: String,
}

impl ModelMetadata {
    fn new(n_samples: usize, n_features: usize) -> Self {
        Self {
            library_version: env!("CARGO_PKG_VERSION").to_string(),
            n_samples,
            n_features,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl SavedModel {
    /// Snapshot a trained regressor
    pub fn from_regressor(model: &TrainedRegressor) -> Self {
        let kernel = model.kernel();
        Self {
            task: ModelTask::Regression,
            kernel: kernel.kind().name().to_string(),
            gamma: kernel.gamma(),
            training_features: kernel.features().to_vec(),
            alpha: vec![model.alpha().iter().copied().collect()],
            classes: None,
            metadata: ModelMetadata::new(kernel.len(), kernel.dim()),
        }
    }

    /// Snapshot a trained classifier
    pub fn from_classifier(model: &TrainedClassifier) -> Self {
        let kernel = model.kernel();
        let alpha = model
            .alpha()
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();

        Self {
            task: ModelTask::Classification,
            kernel: kernel.kind().name().to_string(),
            gamma: kernel.gamma(),
            training_features: kernel.features().to_vec(),
            alpha,
            classes: Some(model.classes().to_vec()),
            metadata: ModelMetadata::new(kernel.len(), kernel.dim()),
        }
    }

    /// Rebuild a trained regressor from the snapshot
    pub fn to_regressor(&self) -> Result<TrainedRegressor> {
        if self.task != ModelTask::Regression {
            return Err(RidgeError::InvalidParameter(
                "saved model is a classifier, not a regressor".to_string(),
            ));
        }
        let kernel = self.rebuild_kernel()?;
        let row = self.alpha_row(0)?;
        TrainedRegressor::from_parts(kernel, DVector::from_vec(row))
    }

    /// Rebuild a trained classifier from the snapshot
    pub fn to_classifier(&self) -> Result<TrainedClassifier> {
        if self.task != ModelTask::Classification {
            return Err(RidgeError::InvalidParameter(
                "saved model is a regressor, not a classifier".to_string(),
            ));
        }
        let classes = self.classes.clone().ok_or_else(|| {
            RidgeError::SerializationError("classifier snapshot is missing its classes".to_string())
        })?;

        let kernel = self.rebuild_kernel()?;
        let n = kernel.len();
        let mut flat = Vec::with_capacity(self.alpha.len() * n);
        for i in 0..self.alpha.len() {
            flat.extend(self.alpha_row(i)?);
        }
        let alpha = DMatrix::from_row_slice(self.alpha.len(), n, &flat);

        TrainedClassifier::from_parts(kernel, alpha, classes)
    }

    fn rebuild_kernel(&self) -> Result<GramKernel> {
        let kind = KernelKind::from_name(&self.kernel)?;
        GramKernel::new(self.training_features.clone(), kind, self.gamma)
    }

    fn alpha_row(&self, i: usize) -> Result<Vec<f64>> {
        let row = self.alpha.get(i).ok_or_else(|| {
            RidgeError::SerializationError(format!("coefficient row {i} is missing"))
        })?;
        if row.len() != self.training_features.len() {
            return Err(RidgeError::DimensionMismatch {
                expected: self.training_features.len(),
                actual: row.len(),
            });
        }
        Ok(row.clone())
    }

    /// Save model to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(RidgeError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| RidgeError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load model from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(RidgeError::IoError)?;
        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .map_err(|e| RidgeError::SerializationError(e.to_string()))?;
        Ok(model)
    }

    /// Print model summary
    pub fn print_summary(&self) {
        println!("=== Kernel Ridge Model Summary ===");
        println!("Task: {:?}", self.task);
        println!("Kernel: {} (gamma = {})", self.kernel, self.gamma);
        println!("Training samples: {}", self.metadata.n_samples);
        println!("Feature dimensionality: {}", self.metadata.n_features);
        if let Some(classes) = &self.classes {
            println!("Classes: {classes:?}");
        }
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{KernelRidgeClassifier, KernelRidgeRegressor};
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    fn toy_regressor() -> TrainedRegressor {
        let x: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();
        KernelRidgeRegressor::new()
            .with_c(0.1)
            .with_gamma(1.0)
            .fit(&x, &[0.0, 1.0, 2.0, 3.0])
            .unwrap()
    }

    fn toy_classifier() -> TrainedClassifier {
        let x: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();
        KernelRidgeClassifier::new()
            .with_c(0.01)
            .with_gamma(1.0)
            .fit(&x, &[0, 0, 1, 1])
            .unwrap()
    }

    #[test]
    fn test_regressor_round_trip() {
        let model = toy_regressor();
        let saved = SavedModel::from_regressor(&model);

        let temp = NamedTempFile::new().expect("Failed to create temp file");
        saved.save_to_file(temp.path()).unwrap();
        let restored = SavedModel::load_from_file(temp.path())
            .unwrap()
            .to_regressor()
            .unwrap();

        for x in [[0.0], [1.5], [2.5]] {
            assert_relative_eq!(
                model.predict_one(&x).unwrap(),
                restored.predict_one(&x).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_classifier_round_trip() {
        let model = toy_classifier();
        let saved = SavedModel::from_classifier(&model);

        let temp = NamedTempFile::new().expect("Failed to create temp file");
        saved.save_to_file(temp.path()).unwrap();
        let restored = SavedModel::load_from_file(temp.path())
            .unwrap()
            .to_classifier()
            .unwrap();

        assert_eq!(restored.classes(), model.classes());
        let xs: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();
        assert_eq!(restored.predict(&xs).unwrap(), model.predict(&xs).unwrap());
    }

    #[test]
    fn test_task_mismatch_rejected() {
        let saved = SavedModel::from_regressor(&toy_regressor());
        let err = saved.to_classifier().unwrap_err();
        assert!(matches!(err, RidgeError::InvalidParameter(_)));

        let saved = SavedModel::from_classifier(&toy_classifier());
        let err = saved.to_regressor().unwrap_err();
        assert!(matches!(err, RidgeError::InvalidParameter(_)));
    }

    #[test]
    fn test_metadata_recorded() {
        let saved = SavedModel::from_classifier(&toy_classifier());
        assert_eq!(saved.metadata.n_samples, 4);
        assert_eq!(saved.metadata.n_features, 1);
        assert_eq!(saved.metadata.library_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(saved.kernel, "rbf");
    }
}
