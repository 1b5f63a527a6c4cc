//! Kernel functions and the Gram view over a training set
//!
//! `KernelKind` is the registry of supported kernels, selected by name at
//! model construction. `GramKernel` binds a kernel function to a training
//! set and exposes the two similarity operations the solve pipeline needs:
//! the full pairwise matrix and the similarity of a new sample against
//! every training sample.

pub mod linear;
pub mod polynomial;
pub mod rbf;
pub mod traits;

pub use self::linear::*;
pub use self::polynomial::*;
pub use self::rbf::*;
pub use self::traits::*;

use crate::core::{Result, RidgeError};
use nalgebra::{DMatrix, DVector};

/// Registry of supported kernels
///
/// Unknown names fail at model construction, before any training work runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    /// Radial basis function, exp(-γ‖x−y‖²)
    Rbf,
    /// Plain dot product; gamma is ignored
    Linear,
    /// Cubic polynomial (γ<x,y> + 1)³
    Polynomial,
}

impl KernelKind {
    /// Look up a kernel by its registry name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rbf" => Ok(Self::Rbf),
            "linear" => Ok(Self::Linear),
            "polynomial" | "poly" => Ok(Self::Polynomial),
            other => Err(RidgeError::UnsupportedKernel(other.to_string())),
        }
    }

    /// Registry name of this kernel
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rbf => "rbf",
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
        }
    }

    /// Instantiate the kernel function with the given scale parameter
    pub fn make(&self, gamma: f64) -> Box<dyn KernelFunction> {
        match self {
            Self::Rbf => Box::new(RbfKernel::new(gamma)),
            Self::Linear => Box::new(LinearKernel::new()),
            Self::Polynomial => Box::new(PolynomialKernel::cubic(gamma)),
        }
    }
}

/// Kernel bound to a training set
///
/// Owns the training features for the lifetime of the model: fit uses
/// `similarity_matrix` once to build the system, predict uses `similarity`
/// per new sample.
#[derive(Debug)]
pub struct GramKernel {
    features: Vec<Vec<f64>>,
    function: Box<dyn KernelFunction>,
    kind: KernelKind,
    gamma: f64,
}

impl GramKernel {
    /// Bind a kernel from the registry to a training set
    ///
    /// Fails on an empty training set, inconsistent feature dimensions, or a
    /// non-positive gamma.
    pub fn new(features: Vec<Vec<f64>>, kind: KernelKind, gamma: f64) -> Result<Self> {
        if features.is_empty() {
            return Err(RidgeError::EmptyDataset);
        }
        if gamma <= 0.0 {
            return Err(RidgeError::InvalidParameter(format!(
                "gamma must be positive, got {gamma}"
            )));
        }

        let dim = features[0].len();
        for row in &features {
            if row.len() != dim {
                return Err(RidgeError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            features,
            function: kind.make(gamma),
            kind,
            gamma,
        })
    }

    /// Number of training samples
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the training set is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature dimensionality of the training set
    pub fn dim(&self) -> usize {
        self.features[0].len()
    }

    /// Which registry kernel this is
    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// Kernel scale parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Training feature rows
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Full pairwise similarity matrix over the training set
    ///
    /// Symmetric N×N; the upper triangle is computed and mirrored. This is
    /// the O(N²·d) step that dominates fit cost, so callers compute it once
    /// per fit.
    pub fn similarity_matrix(&self) -> DMatrix<f64> {
        let n = self.features.len();
        let mut gram = DMatrix::<f64>::zeros(n, n);

        for i in 0..n {
            for j in i..n {
                let value = self.function.compute(&self.features[i], &self.features[j]);
                gram[(i, j)] = value;
                gram[(j, i)] = value;
            }
        }
        gram
    }

    /// Similarity of one new sample against every training sample
    pub fn similarity(&self, x: &[f64]) -> Result<DVector<f64>> {
        if x.len() != self.dim() {
            return Err(RidgeError::DimensionMismatch {
                expected: self.dim(),
                actual: x.len(),
            });
        }

        Ok(DVector::from_iterator(
            self.features.len(),
            self.features.iter().map(|row| self.function.compute(row, x)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_features() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![2.0, 2.0],
            vec![-1.0, 0.5],
        ]
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(KernelKind::from_name("rbf").unwrap(), KernelKind::Rbf);
        assert_eq!(KernelKind::from_name("linear").unwrap(), KernelKind::Linear);
        assert_eq!(
            KernelKind::from_name("poly").unwrap(),
            KernelKind::Polynomial
        );
    }

    #[test]
    fn test_registry_unknown_name() {
        let err = KernelKind::from_name("sigmoid").unwrap_err();
        match err {
            RidgeError::UnsupportedKernel(name) => assert_eq!(name, "sigmoid"),
            other => panic!("Expected UnsupportedKernel, got: {other:?}"),
        }
    }

    #[test]
    fn test_registry_names_round_trip() {
        for kind in [KernelKind::Rbf, KernelKind::Linear, KernelKind::Polynomial] {
            assert_eq!(KernelKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn test_gram_matrix_symmetry() {
        for kind in [KernelKind::Rbf, KernelKind::Linear, KernelKind::Polynomial] {
            let kernel = GramKernel::new(toy_features(), kind, 0.5).unwrap();
            let gram = kernel.similarity_matrix();

            assert_eq!(gram.nrows(), 4);
            assert_eq!(gram.ncols(), 4);
            for i in 0..4 {
                for j in 0..4 {
                    assert_eq!(gram[(i, j)], gram[(j, i)]);
                }
            }
        }
    }

    #[test]
    fn test_rbf_gram_unit_diagonal() {
        let kernel = GramKernel::new(toy_features(), KernelKind::Rbf, 1.0).unwrap();
        let gram = kernel.similarity_matrix();

        for i in 0..4 {
            assert!((gram[(i, i)] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_similarity_matches_matrix_row() {
        let features = toy_features();
        let kernel = GramKernel::new(features.clone(), KernelKind::Rbf, 1.0).unwrap();
        let gram = kernel.similarity_matrix();
        let s = kernel.similarity(&features[2]).unwrap();

        for i in 0..4 {
            assert!((s[i] - gram[(i, 2)]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_similarity_dimension_check() {
        let kernel = GramKernel::new(toy_features(), KernelKind::Linear, 1.0).unwrap();
        let err = kernel.similarity(&[1.0, 2.0, 3.0]).unwrap_err();
        match err {
            RidgeError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected DimensionMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_training_set_rejected() {
        let err = GramKernel::new(Vec::new(), KernelKind::Rbf, 1.0).unwrap_err();
        assert!(matches!(err, RidgeError::EmptyDataset));
    }

    #[test]
    fn test_ragged_training_set_rejected() {
        let features = vec![vec![1.0, 2.0], vec![1.0]];
        let err = GramKernel::new(features, KernelKind::Rbf, 1.0).unwrap_err();
        assert!(matches!(err, RidgeError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_nonpositive_gamma_rejected() {
        let err = GramKernel::new(toy_features(), KernelKind::Rbf, 0.0).unwrap_err();
        assert!(matches!(err, RidgeError::InvalidParameter(_)));
    }
}
