//! # Comparator Module
//!
//! Turns two signatures into a normalized distance and a five-level
//! similarity classification.
//!
//! ## How It Works
//! 1. Subtract the signatures elementwise (with a saturation rule for
//!    `Same` against a `Much*` level)
//! 2. Normalize the difference vector's Euclidean length by the sum of the
//!    two signatures' own lengths
//! 3. Classify the distance against four ascending thresholds
//!
//! ## Comparison Thresholds
//! | Distance     | Classification |
//! |--------------|----------------|
//! | <= 0         | Identical      |
//! | <= 0.4       | Same           |
//! | <= 0.48      | Similar        |
//! | <= 0.68      | Dissimilar     |
//! | beyond       | Different      |
//!
//! Comparison never fails. Signatures of mismatched lengths still compare,
//! with the longer one's excess passing through as already-maximal
//! difference; this mirrors length-mismatch handling in the signature format
//! and is semantically sound only for same-configuration signatures.

use serde::{Deserialize, Serialize};

use crate::core::signature::{Signature, SignatureSimilarity};
use crate::core::stats::euclidean_length;

/// The four ascending distance thresholds separating the similarity bands.
///
/// The `different` threshold is kept for configurability even though any
/// distance beyond `dissimilar` already classifies as `Different`; there is
/// deliberately no sixth band past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareThresholds {
    /// Upper bound for `Same`: scaled, resized, or mildly distorted copies
    pub same: f64,
    /// Upper bound for `Similar`: recoloured, slightly edited, watermarked
    pub similar: f64,
    /// Upper bound for `Dissimilar`: significantly altered copies
    pub dissimilar: f64,
    /// Upper bound for `Different`; everything beyond is also `Different`
    pub different: f64,
}

impl Default for CompareThresholds {
    fn default() -> Self {
        Self {
            same: 0.4,
            similar: 0.48,
            dissimilar: 0.68,
            different: 0.7,
        }
    }
}

/// Elementwise signature subtraction over the left signature's length.
///
/// A `Same` paired against a `Much*` level saturates to +/-3 instead of the
/// linear +/-2, exaggerating the penalty for "no change detected" against
/// "extreme change detected". Entries past the right signature's end pass
/// through unchanged.
fn subtract(left: &Signature, right: &Signature) -> Vec<i8> {
    let right_levels = right.levels();

    left.levels()
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let left_value = level.as_i8();

            let Some(right_level) = right_levels.get(i) else {
                return left_value;
            };
            let right_value = right_level.as_i8();

            match (left_value, right_value) {
                (0, -2) | (-2, 0) => -3,
                (0, 2) | (2, 0) => 3,
                _ => left_value - right_value,
            }
        })
        .collect()
}

/// Compute the normalized distance between two signatures.
///
/// The subtracted vector's Euclidean length, divided by the sum of the two
/// signatures' own lengths. Two all-`Same` signatures have a combined length
/// of exactly zero; their distance is defined as zero.
pub fn normalized_distance(left: &Signature, right: &Signature) -> f64 {
    let subtracted_length = euclidean_length(&subtract(left, right));

    let combined_length =
        euclidean_length(&left.to_vec_i8()) + euclidean_length(&right.to_vec_i8());

    if combined_length == 0.0 {
        return 0.0;
    }

    subtracted_length / combined_length
}

/// Compare two signatures against custom thresholds.
pub fn compare_with(
    left: &Signature,
    right: &Signature,
    thresholds: &CompareThresholds,
) -> SignatureSimilarity {
    let distance = normalized_distance(left, right);

    if distance <= 0.0 {
        SignatureSimilarity::Identical
    } else if distance <= thresholds.same {
        SignatureSimilarity::Same
    } else if distance <= thresholds.similar {
        SignatureSimilarity::Similar
    } else if distance <= thresholds.dissimilar {
        SignatureSimilarity::Dissimilar
    } else {
        SignatureSimilarity::Different
    }
}

/// Compare two signatures against the default thresholds.
pub fn compare(left: &Signature, right: &Signature) -> SignatureSimilarity {
    compare_with(left, right, &CompareThresholds::default())
}
