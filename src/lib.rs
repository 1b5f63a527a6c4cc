//! Kernel ridge regression and classification in Rust
//!
//! Models are trained with closed-form linear-system solves: a pairwise
//! similarity (Gram) matrix over the training set, a ridge-regularized
//! positive-definite solve for the dual coefficients, and prediction via
//! similarity-weighted aggregation.

pub mod api;
pub mod augment;
pub mod core;
pub mod data;
pub mod estimator;
pub mod features;
pub mod kernel;
pub mod labels;
pub mod persistence;
pub mod solver;

// Re-export main types for convenience
pub use crate::api::{
    AugmentedHogClassifier, ClassificationReport, KernelRidgeClassifier, KernelRidgeRegressor,
    RegressionReport, TrainedImageClassifier,
};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::data::CsvDataset;
pub use crate::estimator::{RidgeEstimator, TrainedClassifier, TrainedRegressor};
pub use crate::features::HogExtractor;
pub use crate::kernel::{
    GramKernel, KernelFunction, KernelKind, LinearKernel, PolynomialKernel, RbfKernel,
};
pub use crate::labels::LabelBinarizer;
pub use crate::persistence::SavedModel;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
