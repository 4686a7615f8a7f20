//! # Core Module
//!
//! The signature engine and its collaborator boundaries.
//!
//! ## Modules
//! - `pixels` - Grayscale pixel-source boundary and buffer adapters
//! - `autocrop` - Entropy-based border cropping collaborator
//! - `signature` - The signature data model and similarity levels
//! - `generator` - Generates signatures from images
//! - `comparator` - Compares signatures into similarity classifications

pub mod autocrop;
pub mod comparator;
pub mod generator;
pub mod pixels;
pub mod signature;

mod stats;

// Re-export commonly used types
pub use autocrop::{Autocrop, EntropyCrop};
pub use comparator::{compare, compare_with, normalized_distance, CompareThresholds};
pub use generator::{GeneratorConfig, SignatureGenerator};
pub use pixels::{LumaBuffer, PixelSource};
pub use signature::{LuminosityLevel, Signature, SignatureSimilarity};
