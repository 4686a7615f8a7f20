//! # Image Signature
//!
//! Compact, comparable fingerprints of raster images, for detecting
//! near-duplicate, recoloured, resized, or stylistically-altered copies
//! without comparing raw pixels.
//!
//! ## How It Works
//! 1. Reduce the image to grayscale and (optionally) crop away low-information borders
//! 2. Sample average luminosities over a regular grid of points
//! 3. Quantize neighbor-to-neighbor luminosity differences into five relative
//!    levels, thresholded adaptively per image
//! 4. Compare two signatures via a normalized vector distance and classify the
//!    result into five similarity bands
//!
//! ## Architecture
//! The library is split into the signature engine and its narrow collaborator
//! boundaries:
//! - `core` - Signature generation and comparison
//! - `error` - Error types
//!
//! ## Example
//! ```rust,ignore
//! use image_signature::{compare, GeneratorConfig, SignatureGenerator};
//!
//! let generator = SignatureGenerator::new(GeneratorConfig::new());
//! let first = generator.generate(&first_image)?;
//! let second = generator.generate(&second_image)?;
//! let similarity = compare(&first, &second);
//! ```

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::autocrop::{Autocrop, EntropyCrop};
pub use crate::core::comparator::{compare, compare_with, normalized_distance, CompareThresholds};
pub use crate::core::generator::{GeneratorConfig, SignatureGenerator};
pub use crate::core::pixels::{LumaBuffer, PixelSource};
pub use crate::core::signature::{LuminosityLevel, Signature, SignatureSimilarity};
pub use error::{Result, SignatureError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
