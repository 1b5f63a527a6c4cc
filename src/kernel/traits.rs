//! Kernel function trait definition

/// Pairwise kernel function
///
/// A kernel K(x, y) must satisfy Mercer's condition so that the Gram matrix
/// over any training set is symmetric positive semi-definite. This trait is
/// the interface shared by all kernel implementations.
pub trait KernelFunction: Send + Sync + std::fmt::Debug {
    /// Compute the kernel value K(x, y)
    ///
    /// Both slices must have the same length; callers are responsible for
    /// dimension checks.
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;
}
