//! Core type definitions for kernel ridge models

use crate::kernel::KernelKind;

/// Training sample with dense features and label
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Feature vector (dense representation)
    pub features: Vec<f64>,
    /// Target value: real-valued for regression, class label for classification
    pub label: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    /// Feature dimensionality
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Grayscale raster image, row-major pixel storage
///
/// This is the raw input of the augmented image classification pipeline;
/// pixel intensities are arbitrary real values (typically [0, 1] or [0, 255]).
#[derive(Clone, Debug, PartialEq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<f64>,
}

impl GrayImage {
    /// Create an image from row-major pixel data
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<f64>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "Pixel buffer must have width * height entries"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel intensity at (x, y)
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "Pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Row-major pixel buffer
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    /// Mirror the image around its vertical axis
    pub fn flipped_horizontal(&self) -> GrayImage {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(self.get(self.width - 1 - x, y));
            }
        }
        GrayImage::new(self.width, self.height, pixels)
    }

    /// Rotate counterclockwise by `angle_degrees` around the image center
    ///
    /// Uses nearest-neighbor resampling; destination pixels that map outside
    /// the source raster are filled with 0.0.
    pub fn rotated(&self, angle_degrees: f64) -> GrayImage {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let cx = (self.width as f64 - 1.0) / 2.0;
        let cy = (self.height as f64 - 1.0) / 2.0;

        let mut pixels = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                // Inverse mapping: rotate the destination coordinate by -theta
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                let sx = cos * dx + sin * dy + cx;
                let sy = -sin * dx + cos * dy + cy;

                let sxi = sx.round();
                let syi = sy.round();
                let value = if sxi >= 0.0
                    && syi >= 0.0
                    && (sxi as usize) < self.width
                    && (syi as usize) < self.height
                {
                    self.get(sxi as usize, syi as usize)
                } else {
                    0.0
                };
                pixels.push(value);
            }
        }
        GrayImage::new(self.width, self.height, pixels)
    }
}

/// Hyperparameters shared by every kernel ridge estimator
#[derive(Debug, Clone, Copy)]
pub struct RidgeConfig {
    /// Regularization constant; the solve adds C * n_samples to the Gram diagonal
    pub c: f64,
    /// Kernel selected from the registry
    pub kernel: KernelKind,
    /// Kernel scale parameter (bandwidth for RBF, dot-product scale otherwise)
    pub gamma: f64,
}

impl Default for RidgeConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            kernel: KernelKind::Rbf,
            gamma: 10.0,
        }
    }
}

/// Configuration for training-time dataset augmentation
#[derive(Debug, Clone, Copy)]
pub struct AugmentConfig {
    /// Share of samples receiving a horizontally flipped copy
    pub flip_ratio: f64,
    /// Number of rotated replicas added per selection round
    pub rot_replicas: usize,
    /// Share of samples receiving a rotated copy in each round
    pub rot_ratio: f64,
    /// Maximum rotation magnitude in degrees; angles are drawn from [-rot_angle, rot_angle]
    pub rot_angle: f64,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            flip_ratio: 0.2,
            rot_replicas: 1,
            rot_ratio: 0.2,
            rot_angle: 20.0,
        }
    }
}
