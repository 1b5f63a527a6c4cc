//! Histogram-of-oriented-gradients feature extraction
//!
//! Turns grayscale rasters into dense descriptors: gradient orientation
//! histograms accumulated per cell, L2-normalized, concatenated in row-major
//! cell order. The transform is deterministic and identical between training
//! and prediction.

use crate::core::{FeatureExtractor, Result, RidgeError};
use crate::GrayImage;

const NORM_EPS: f64 = 1e-12;

/// HOG descriptor extractor
#[derive(Debug, Clone, Copy)]
pub struct HogExtractor {
    orientations: usize,
    cell_size: usize,
}

impl Default for HogExtractor {
    /// 9 unsigned orientation bins over 8x8 cells
    fn default() -> Self {
        Self {
            orientations: 9,
            cell_size: 8,
        }
    }
}

impl HogExtractor {
    /// Create an extractor with the given histogram resolution
    ///
    /// # Panics
    /// Panics if either parameter is zero
    pub fn new(orientations: usize, cell_size: usize) -> Self {
        assert!(orientations > 0, "Orientation bin count must be positive");
        assert!(cell_size > 0, "Cell size must be positive");
        Self {
            orientations,
            cell_size,
        }
    }

    /// Number of orientation bins per cell
    pub fn orientations(&self) -> usize {
        self.orientations
    }

    /// Cell edge length in pixels
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Descriptor length for an image of the given dimensions
    pub fn descriptor_len(&self, width: usize, height: usize) -> usize {
        (width / self.cell_size) * (height / self.cell_size) * self.orientations
    }

    /// Compute the descriptor of a single image
    pub fn descriptor(&self, image: &GrayImage) -> Result<Vec<f64>> {
        let width = image.width();
        let height = image.height();
        let cells_x = width / self.cell_size;
        let cells_y = height / self.cell_size;

        if cells_x == 0 || cells_y == 0 {
            return Err(RidgeError::InvalidDataset(format!(
                "image {width}x{height} is smaller than one {size}x{size} cell",
                size = self.cell_size
            )));
        }

        let bin_width = 180.0 / self.orientations as f64;
        let mut histograms = vec![0.0; cells_x * cells_y * self.orientations];

        // Pixels beyond the last full cell are ignored
        for y in 0..cells_y * self.cell_size {
            for x in 0..cells_x * self.cell_size {
                let (gx, gy) = gradient(image, x, y);
                let magnitude = (gx * gx + gy * gy).sqrt();
                if magnitude == 0.0 {
                    continue;
                }

                // Unsigned orientation folded into [0, 180)
                let angle = gy.atan2(gx).to_degrees().rem_euclid(180.0);
                let bin = ((angle / bin_width) as usize).min(self.orientations - 1);

                let cell = (y / self.cell_size) * cells_x + x / self.cell_size;
                histograms[cell * self.orientations + bin] += magnitude;
            }
        }

        // L2-normalize each cell histogram independently
        for hist in histograms.chunks_mut(self.orientations) {
            let norm = hist.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > NORM_EPS {
                for v in hist.iter_mut() {
                    *v /= norm;
                }
            }
        }

        Ok(histograms)
    }
}

impl FeatureExtractor for HogExtractor {
    fn transform(&self, images: &[GrayImage]) -> Result<Vec<Vec<f64>>> {
        let mut features: Vec<Vec<f64>> = Vec::with_capacity(images.len());
        for image in images {
            let descriptor = self.descriptor(image)?;
            if let Some(first) = features.first() {
                let expected = first.len();
                if descriptor.len() != expected {
                    return Err(RidgeError::DimensionMismatch {
                        expected,
                        actual: descriptor.len(),
                    });
                }
            }
            features.push(descriptor);
        }
        Ok(features)
    }
}

/// Central-difference gradient with one-sided differences at the borders
fn gradient(image: &GrayImage, x: usize, y: usize) -> (f64, f64) {
    let width = image.width();
    let height = image.height();

    let gx = match x {
        0 => image.get(1.min(width - 1), y) - image.get(0, y),
        x if x == width - 1 => image.get(x, y) - image.get(x - 1, y),
        x => image.get(x + 1, y) - image.get(x - 1, y),
    };
    let gy = match y {
        0 => image.get(x, 1.min(height - 1)) - image.get(x, 0),
        y if y == height - 1 => image.get(x, y) - image.get(x, y - 1),
        y => image.get(x, y + 1) - image.get(x, y - 1),
    };
    (gx, gy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_edge(size: usize) -> GrayImage {
        // Left half dark, right half bright: horizontal gradient only
        let pixels = (0..size * size)
            .map(|i| if i % size < size / 2 { 0.0 } else { 1.0 })
            .collect();
        GrayImage::new(size, size, pixels)
    }

    #[test]
    fn test_descriptor_length() {
        let extractor = HogExtractor::new(9, 4);
        let image = GrayImage::new(8, 8, vec![0.0; 64]);

        let descriptor = extractor.descriptor(&image).unwrap();
        assert_eq!(descriptor.len(), 2 * 2 * 9);
        assert_eq!(descriptor.len(), extractor.descriptor_len(8, 8));
    }

    #[test]
    fn test_uniform_image_gives_zero_descriptor() {
        let extractor = HogExtractor::new(9, 4);
        let image = GrayImage::new(8, 8, vec![0.5; 64]);

        let descriptor = extractor.descriptor(&image).unwrap();
        assert!(descriptor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_descriptor_is_deterministic() {
        let extractor = HogExtractor::new(9, 4);
        let image = vertical_edge(8);

        assert_eq!(
            extractor.descriptor(&image).unwrap(),
            extractor.descriptor(&image).unwrap()
        );
    }

    #[test]
    fn test_vertical_edge_hits_horizontal_bin() {
        let extractor = HogExtractor::new(9, 8);
        let descriptor = extractor.descriptor(&vertical_edge(8)).unwrap();

        // A purely horizontal gradient has angle 0, which lands in bin 0
        assert!(descriptor[0] > 0.0);
        assert!(descriptor[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cell_histograms_are_normalized() {
        let extractor = HogExtractor::new(9, 4);
        let descriptor = extractor.descriptor(&vertical_edge(8)).unwrap();

        for hist in descriptor.chunks(9) {
            let norm = hist.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_image_smaller_than_cell_rejected() {
        let extractor = HogExtractor::new(9, 8);
        let image = GrayImage::new(4, 4, vec![0.0; 16]);

        let err = extractor.descriptor(&image).unwrap_err();
        assert!(matches!(err, RidgeError::InvalidDataset(_)));
    }

    #[test]
    fn test_transform_preserves_order_and_shape() {
        let extractor = HogExtractor::new(4, 4);
        let images = vec![vertical_edge(8), GrayImage::new(8, 8, vec![0.0; 64])];

        let features = extractor.transform(&images).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].len(), features[1].len());
        // The edge image has gradient energy, the blank one has none
        assert!(features[0].iter().any(|&v| v > 0.0));
        assert!(features[1].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_transform_rejects_mixed_sizes() {
        let extractor = HogExtractor::new(4, 4);
        let images = vec![
            GrayImage::new(8, 8, vec![0.0; 64]),
            GrayImage::new(12, 12, vec![0.0; 144]),
        ];

        let err = extractor.transform(&images).unwrap_err();
        assert!(matches!(err, RidgeError::DimensionMismatch { .. }));
    }
}
