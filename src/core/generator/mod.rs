//! # Generator Module
//!
//! Generates image signatures.
//!
//! ## How It Works
//! 1. Optionally autocrop the image to its visually significant region
//! 2. Average luminosities over a `grid_size` x `grid_size` grid of sample
//!    squares (each pixel smoothed by a 3x3 local average first)
//! 3. Take each grid cell's luminosity difference against 8 neighbor offsets
//! 4. Quantize the differences into five [`LuminosityLevel`]s, with the
//!    "much darker/lighter" cutoffs derived from the medians of this image's
//!    own outliers
//!
//! The output length is always `grid_size² * 8`, independent of the input
//! image's dimensions.
//!
//! ## Example
//! ```rust,ignore
//! let generator = SignatureGenerator::new(GeneratorConfig::new().grid_size(9))?;
//! let signature = generator.generate(&image)?;
//! ```

mod sampling;

use tracing::debug;

use crate::core::autocrop::{Autocrop, EntropyCrop};
use crate::core::pixels::PixelSource;
use crate::core::signature::{LuminosityLevel, Signature};
use crate::core::stats::median;
use crate::error::{Result, SignatureError};

/// Neighbor offsets each grid cell is differenced against, in signature order.
///
/// This table is part of the signature format: it omits the pure-horizontal
/// neighbors and repeats `(0, -1)` and `(0, 1)`. Correcting it to a full
/// Moore neighborhood would break compatibility with every signature
/// generated so far, so it stays verbatim.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (0, -1),
    (0, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Configuration for signature generation
///
/// Immutable once handed to a [`SignatureGenerator`]. Signatures generated
/// under different configurations are not meaningfully comparable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Sample grid side length; the signature holds `grid_size² * 8` entries
    grid_size: u32,
    /// Luminosity-difference magnitude below which two samples count as equal
    noise_cutoff: f64,
    /// Oversampling ratio tying the sample window size to the grid density
    sample_size_ratio: f64,
    /// Whether to crop the image to its significant region before sampling
    enable_autocrop: bool,
}

impl GeneratorConfig {
    /// Create a configuration with the default parameters
    pub fn new() -> Self {
        Self {
            grid_size: 9,
            noise_cutoff: 2.0,
            sample_size_ratio: 2.0,
            enable_autocrop: true,
        }
    }

    /// Set the grid side length
    ///
    /// Larger grids capture more spatial detail at the cost of longer
    /// signatures. The default of 9 yields 648-entry signatures.
    pub fn grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the noise cutoff (default 2.0)
    pub fn noise_cutoff(mut self, noise_cutoff: f64) -> Self {
        self.noise_cutoff = noise_cutoff;
        self
    }

    /// Set the sample size ratio (default 2.0)
    pub fn sample_size_ratio(mut self, sample_size_ratio: f64) -> Self {
        self.sample_size_ratio = sample_size_ratio;
        self
    }

    /// Enable or disable autocrop (default enabled)
    pub fn enable_autocrop(mut self, enable_autocrop: bool) -> Self {
        self.enable_autocrop = enable_autocrop;
        self
    }

    /// Number of entries in signatures generated under this configuration
    pub fn signature_len(&self) -> usize {
        (self.grid_size as usize).pow(2) * 8
    }

    fn validate(&self) -> Result<()> {
        if !(self.noise_cutoff >= 0.0) {
            return Err(SignatureError::Config(format!(
                "noise cutoff must be non-negative, got {}",
                self.noise_cutoff
            )));
        }

        if !(self.sample_size_ratio > 0.0) {
            return Err(SignatureError::Config(format!(
                "sample size ratio must be positive, got {}",
                self.sample_size_ratio
            )));
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates image signatures under a fixed configuration.
///
/// Stateless apart from the immutable configuration; one generator can be
/// shared freely across threads.
pub struct SignatureGenerator {
    config: GeneratorConfig,
    autocrop: Box<dyn Autocrop>,
}

impl SignatureGenerator {
    /// Create a generator using the bundled entropy cropper
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_autocrop(config, Box::new(EntropyCrop::default()))
    }

    /// Create a generator with a custom autocrop collaborator
    pub fn with_autocrop(config: GeneratorConfig, autocrop: Box<dyn Autocrop>) -> Result<Self> {
        config.validate()?;

        Ok(Self { config, autocrop })
    }

    /// The configuration this generator was built with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a signature from the given image.
    ///
    /// Fails only when the pixel source cannot supply a contiguous buffer;
    /// degenerate images (down to 0x0) still produce a full-length signature.
    pub fn generate(&self, image: &dyn PixelSource) -> Result<Signature> {
        if self.config.enable_autocrop {
            let cropped = self.autocrop.crop(image);
            self.generate_uncropped(&cropped)
        } else {
            self.generate_uncropped(image)
        }
    }

    fn generate_uncropped(&self, image: &dyn PixelSource) -> Result<Signature> {
        let (width, height) = (image.width(), image.height());

        let pixels = image
            .as_contiguous()
            .ok_or(SignatureError::NonContiguousBuffer { width, height })?;

        let averages = sampling::compute_average_sample_luminosities(
            pixels,
            i64::from(width),
            i64::from(height),
            self.config.grid_size,
            self.config.sample_size_ratio,
        );

        let differences = self.compute_neighbor_differences(&averages);
        let levels = quantize_differences(&differences, self.config.noise_cutoff);

        debug!(
            width,
            height,
            entries = levels.len(),
            "generated signature"
        );

        Ok(Signature::from_levels(levels))
    }

    /// Luminosity differences between each cell and its table neighbors.
    ///
    /// Cells are addressed as `x + grid_size * y`; a neighbor whose flat
    /// index falls outside the grid contributes a difference of zero. Only
    /// the flat index is range-checked, so offsets can wrap across rows;
    /// that wrap is part of the signature format.
    fn compute_neighbor_differences(&self, averages: &[f64]) -> Vec<f64> {
        let grid = i64::from(self.config.grid_size);
        let cell_count = averages.len() as i64;

        let mut differences = Vec::with_capacity(self.config.signature_len());
        for x in 0..grid {
            for y in 0..grid {
                let base = averages[(x + grid * y) as usize];

                for (tile_x, tile_y) in NEIGHBOR_OFFSETS {
                    let neighbor = (x + tile_x) + grid * (y + tile_y);

                    if neighbor < 0 || neighbor >= cell_count {
                        differences.push(0.0);
                    } else {
                        differences.push(base - averages[neighbor as usize]);
                    }
                }
            }
        }

        differences
    }
}

/// Quantize raw luminosity differences into discrete levels.
///
/// Differences within the noise band collapse to `Same`. The remaining
/// values split into darks and lights, and the medians of those two subsets
/// become the image-relative cutoffs for `MuchDarker` / `MuchLighter`; an
/// empty subset falls back to the noise cutoff itself.
fn quantize_differences(differences: &[f64], noise_cutoff: f64) -> Vec<LuminosityLevel> {
    let mut darks = Vec::with_capacity(differences.len());
    let mut lights = Vec::with_capacity(differences.len());

    for &difference in differences {
        if difference >= -noise_cutoff && difference <= noise_cutoff {
            continue;
        }

        if difference < noise_cutoff {
            darks.push(difference);
            continue;
        }

        if difference > noise_cutoff {
            lights.push(difference);
        }
    }

    let much_darker_cutoff = if darks.is_empty() {
        -noise_cutoff
    } else {
        median(&darks)
    };
    let much_lighter_cutoff = if lights.is_empty() {
        noise_cutoff
    } else {
        median(&lights)
    };

    differences
        .iter()
        .map(|&difference| {
            if difference >= -noise_cutoff && difference <= noise_cutoff {
                return LuminosityLevel::Same;
            }

            if difference < 0.0 {
                return if difference < much_darker_cutoff {
                    LuminosityLevel::MuchDarker
                } else {
                    LuminosityLevel::Darker
                };
            }

            if difference > much_lighter_cutoff {
                LuminosityLevel::MuchLighter
            } else {
                LuminosityLevel::Lighter
            }
        })
        .collect()
}
