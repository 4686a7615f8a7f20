//! # Autocrop Module
//!
//! Entropy-based border cropping, applied before grid sampling so that
//! uniform margins (letterboxing, scanner borders, solid padding) do not
//! dilute the sampled region.
//!
//! The signature generator only depends on the [`Autocrop`] trait; the
//! bundled [`EntropyCrop`] keeps the bounding box of rows and columns that
//! carry any information, measured as Shannon entropy of their intensity
//! histograms.

use tracing::debug;

use crate::core::pixels::{LumaBuffer, PixelSource};

/// Trims an image down to its visually significant region.
///
/// Implementations must not mutate the input and must be idempotent: cropping
/// an already-cropped image returns it unchanged.
pub trait Autocrop: Send + Sync {
    /// Produce a cropped copy of the source. When nothing can be trimmed the
    /// result is a plain copy.
    fn crop(&self, source: &dyn PixelSource) -> LumaBuffer;
}

/// Crops away border rows and columns whose intensity histograms carry at
/// most `threshold` bits of entropy.
///
/// The default threshold of zero trims only perfectly uniform borders.
/// Trimming repeats until a fixed point, so cropping an already-cropped
/// image returns it unchanged.
#[derive(Debug, Clone)]
pub struct EntropyCrop {
    threshold: f64,
}

impl EntropyCrop {
    /// Create a cropper trimming rows and columns at or below the given
    /// entropy, in bits per pixel.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Shannon entropy in bits of one row or column of intensities.
    fn line_entropy(line: impl Iterator<Item = u8>, length: usize) -> f64 {
        let mut histogram = [0u32; 256];
        for value in line {
            histogram[value as usize] += 1;
        }

        let total = length as f64;
        let mut entropy = 0.0;
        for &count in &histogram {
            if count > 0 {
                let p = f64::from(count) / total;
                entropy -= p * p.log2();
            }
        }

        entropy
    }

    /// First and last indices whose entropy exceeds the threshold, if any.
    fn significant_span(&self, entropies: &[f64]) -> Option<(u32, u32)> {
        let first = entropies.iter().position(|&e| e > self.threshold)?;
        let last = entropies.iter().rposition(|&e| e > self.threshold)?;
        Some((first as u32, last as u32))
    }

    /// One trimming pass over the buffer. Returns `None` when no border row
    /// or column can be trimmed.
    fn crop_once(&self, buffer: &LumaBuffer) -> Option<LumaBuffer> {
        let (width, height) = (buffer.width(), buffer.height());

        if width == 0 || height == 0 {
            return None;
        }

        let row_entropies: Vec<f64> = (0..height)
            .map(|y| {
                Self::line_entropy((0..width).map(|x| buffer.pixel(x, y)), width as usize)
            })
            .collect();
        let column_entropies: Vec<f64> = (0..width)
            .map(|x| {
                Self::line_entropy((0..height).map(|y| buffer.pixel(x, y)), height as usize)
            })
            .collect();

        let rows = self.significant_span(&row_entropies);
        let columns = self.significant_span(&column_entropies);

        let ((top, bottom), (left, right)) = match (rows, columns) {
            (Some(rows), Some(columns)) => (rows, columns),
            // Nothing significant anywhere (a uniform image); leave it be.
            _ => return None,
        };

        if top == 0 && left == 0 && bottom == height - 1 && right == width - 1 {
            return None;
        }

        let cropped_width = right - left + 1;
        let cropped_height = bottom - top + 1;
        let mut pixels = Vec::with_capacity((cropped_width as usize) * (cropped_height as usize));
        for y in top..=bottom {
            for x in left..=right {
                pixels.push(buffer.pixel(x, y));
            }
        }

        debug!(
            width,
            height, cropped_width, cropped_height, "cropped to significant region"
        );

        LumaBuffer::from_raw(cropped_width, cropped_height, pixels)
    }
}

impl Default for EntropyCrop {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Autocrop for EntropyCrop {
    fn crop(&self, source: &dyn PixelSource) -> LumaBuffer {
        let mut buffer = LumaBuffer::copy_from(source);

        // Trimming columns can turn a border row uniform (and vice versa),
        // so re-judge the cropped region until it stops shrinking.
        while let Some(smaller) = self.crop_once(&buffer) {
            buffer = smaller;
        }

        buffer
    }
}
