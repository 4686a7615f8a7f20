//! # Pixels Module
//!
//! The grayscale pixel-source boundary the signature engine consumes.
//!
//! Image decoding and color-space reduction live outside the engine; anything
//! that can hand out single-channel intensities by `(x, y)` and a contiguous
//! row-major scan can produce a signature. Decoded [`image`] buffers plug in
//! directly, and [`LumaBuffer`] adapts everything else.

use image::{DynamicImage, GrayImage};

/// A single-channel intensity source with random access and a bulk scan.
///
/// Coordinates are `(x, y)` with the origin in the top-left corner; intensity
/// values are 0 (black) to 255 (white). `pixel` must be O(1).
pub trait PixelSource {
    /// Width of the image in pixels
    fn width(&self) -> u32;

    /// Height of the image in pixels
    fn height(&self) -> u32;

    /// Read the intensity at `(x, y)`. Both coordinates must be in range.
    fn pixel(&self, x: u32, y: u32) -> u8;

    /// The backing buffer as one contiguous row-major scan, if the source
    /// can provide it. Bulk sampling requires this.
    fn as_contiguous(&self) -> Option<&[u8]>;
}

/// An owned grayscale pixel buffer.
///
/// This is the concrete type the autocrop collaborator hands back, and a
/// convenient adapter for callers that already hold raw intensity data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LumaBuffer {
    /// Create a buffer from raw row-major intensity data.
    ///
    /// Returns `None` if the pixel count does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Reduce a decoded image to a grayscale buffer.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self::from(image.to_luma8())
    }

    /// Copy any pixel source into an owned buffer.
    pub fn copy_from(source: &dyn PixelSource) -> Self {
        let (width, height) = (source.width(), source.height());

        let pixels = match source.as_contiguous() {
            Some(scan) => scan.to_vec(),
            None => {
                let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
                for y in 0..height {
                    for x in 0..width {
                        pixels.push(source.pixel(x, y));
                    }
                }
                pixels
            }
        };

        Self {
            width,
            height,
            pixels,
        }
    }
}

impl From<GrayImage> for LumaBuffer {
    fn from(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }
}

impl PixelSource for LumaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(x as usize) + (y as usize) * (self.width as usize)]
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(&self.pixels)
    }
}

impl PixelSource for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[0]
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(self.as_raw())
    }
}
