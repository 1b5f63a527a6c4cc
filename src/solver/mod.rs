//! Ridge-regularized linear solve
//!
//! Builds (K + C·N·I)·alpha = Y from a Gram matrix and solves it on the
//! positive-definite Cholesky path. The factorization happens once and is
//! reused for every target column, which is what makes one-vs-all
//! classification a single factorization plus cheap back-substitutions.

use crate::core::{Result, RidgeError};
use nalgebra::{Cholesky, DMatrix, DVector};

/// Solve (K + C·N·I)·alpha = targets for every target column
///
/// `gram` must be the symmetric N×N similarity matrix of a valid kernel;
/// with C > 0 the regularized system is symmetric positive definite, and the
/// Cholesky factorization doubles as the runtime check of that assumption.
/// A failed factorization surfaces as `RidgeError::IllConditioned` rather
/// than a silent NaN-filled result.
pub fn solve_ridge(mut gram: DMatrix<f64>, c: f64, targets: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = gram.nrows();

    if gram.ncols() != n {
        return Err(RidgeError::InvalidParameter(format!(
            "Gram matrix must be square, got {}x{}",
            n,
            gram.ncols()
        )));
    }
    if c <= 0.0 {
        return Err(RidgeError::InvalidParameter(format!(
            "regularization constant must be positive, got {c}"
        )));
    }
    if targets.nrows() != n {
        return Err(RidgeError::DimensionMismatch {
            expected: n,
            actual: targets.nrows(),
        });
    }

    let ridge = c * n as f64;
    for i in 0..n {
        gram[(i, i)] += ridge;
    }

    let factorization = Cholesky::new(gram).ok_or(RidgeError::IllConditioned)?;
    Ok(factorization.solve(targets))
}

/// Single-target convenience over [`solve_ridge`]
pub fn solve_ridge_vector(gram: DMatrix<f64>, c: f64, target: &DVector<f64>) -> Result<DVector<f64>> {
    let n = target.len();
    let targets = DMatrix::from_column_slice(n, 1, target.as_slice());
    let solution = solve_ridge(gram, c, &targets)?;
    Ok(solution.column(0).clone_owned())
}
