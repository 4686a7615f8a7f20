//! # Signature Module
//!
//! The signature data model: relative luminosity levels, the fixed-length
//! signature itself, and the similarity classification produced by comparing
//! two signatures.

use serde::{Deserialize, Serialize};

/// A grid cell's luminosity relative to one of its spatial neighbors.
///
/// What counts as "much" darker or lighter is decided per image, against the
/// median of that image's own dark/light outliers, so the levels carry no
/// absolute brightness meaning across images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum LuminosityLevel {
    /// The neighbor is much darker than the base point
    MuchDarker = -2,
    /// The neighbor is darker than the base point
    Darker = -1,
    /// The neighbor is of same or similar luminosity as the base point
    Same = 0,
    /// The neighbor is lighter than the base point
    Lighter = 1,
    /// The neighbor is much lighter than the base point
    MuchLighter = 2,
}

impl LuminosityLevel {
    /// The underlying signed value used for signature arithmetic
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// A compact fingerprint of an image's local-contrast structure.
///
/// An ordered, immutable sequence of [`LuminosityLevel`], one entry per
/// (grid cell, neighbor offset) pair: `grid_size² * 8` entries regardless of
/// the input image's dimensions. Signatures generated under the same
/// configuration are directly comparable; comparing signatures from different
/// configurations still computes, but the result is not meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    levels: Vec<LuminosityLevel>,
}

impl Signature {
    /// Create a signature from a sequence of levels
    pub fn from_levels(levels: Vec<LuminosityLevel>) -> Self {
        Self { levels }
    }

    /// The ordered levels making up this signature
    pub fn levels(&self) -> &[LuminosityLevel] {
        &self.levels
    }

    /// Number of (cell, neighbor) entries in the signature
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the signature holds no entries
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The signature as raw signed values
    pub fn to_vec_i8(&self) -> Vec<i8> {
        self.levels.iter().map(|level| level.as_i8()).collect()
    }
}

/// How similar two compared signatures are, from closest to furthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignatureSimilarity {
    /// The images are identical
    Identical,
    /// The same image, typically scaled, resized, or mildly distorted
    Same,
    /// Somewhat altered: recoloured, slightly edited, or watermarked
    Similar,
    /// Significantly altered or of another character
    Dissimilar,
    /// The images have little to do with each other
    Different,
}

impl std::fmt::Display for SignatureSimilarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureSimilarity::Identical => write!(f, "identical"),
            SignatureSimilarity::Same => write!(f, "same"),
            SignatureSimilarity::Similar => write!(f, "similar"),
            SignatureSimilarity::Dissimilar => write!(f, "dissimilar"),
            SignatureSimilarity::Different => write!(f, "different"),
        }
    }
}
