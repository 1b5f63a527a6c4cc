//! Training-time dataset augmentation
//!
//! Expands an image dataset with label-preserving transforms: horizontal
//! flips for a share of samples and bounded random rotations. Augmentation
//! runs only during fit; prediction never sees augmented data.

use crate::core::{AugmentConfig, Result, RidgeError};
use crate::GrayImage;
use rand::seq::index;
use rand::Rng;

/// Expand a dataset according to the augmentation configuration
///
/// Appends, in order: one horizontally flipped copy for a `flip_ratio` share
/// of randomly chosen samples, then `rot_replicas` rounds of rotated copies
/// for a `rot_ratio` share each, with angles drawn uniformly from
/// [-rot_angle, +rot_angle]. Every augmented sample keeps its source label,
/// so the label vocabulary never changes.
pub fn augment_dataset(
    images: &[GrayImage],
    labels: &[i64],
    config: &AugmentConfig,
    rng: &mut impl Rng,
) -> Result<(Vec<GrayImage>, Vec<i64>)> {
    if images.len() != labels.len() {
        return Err(RidgeError::DimensionMismatch {
            expected: images.len(),
            actual: labels.len(),
        });
    }
    if images.is_empty() {
        return Err(RidgeError::EmptyDataset);
    }
    for (name, ratio) in [("flip_ratio", config.flip_ratio), ("rot_ratio", config.rot_ratio)] {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(RidgeError::InvalidParameter(format!(
                "{name} must lie in [0, 1], got {ratio}"
            )));
        }
    }
    if config.rot_angle < 0.0 {
        return Err(RidgeError::InvalidParameter(format!(
            "rot_angle must be non-negative, got {}",
            config.rot_angle
        )));
    }

    let n = images.len();
    let mut out_images = images.to_vec();
    let mut out_labels = labels.to_vec();

    let flip_count = (config.flip_ratio * n as f64).round() as usize;
    for idx in index::sample(rng, n, flip_count) {
        out_images.push(images[idx].flipped_horizontal());
        out_labels.push(labels[idx]);
    }

    let rot_count = (config.rot_ratio * n as f64).round() as usize;
    for _ in 0..config.rot_replicas {
        for idx in index::sample(rng, n, rot_count) {
            let angle = rng.gen_range(-config.rot_angle..=config.rot_angle);
            out_images.push(images[idx].rotated(angle));
            out_labels.push(labels[idx]);
        }
    }

    Ok((out_images, out_labels))
}
