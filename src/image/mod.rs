//! Image loading and normalization to the canonical schedule size.

mod load;

pub use load::{canonicalize, decode_image, load_image};

use image::{Rgb, RgbaImage};

/// Width every schedule image is resampled to before analysis.
pub const CANONICAL_WIDTH: u32 = 1280;

/// Height every schedule image is resampled to before analysis.
pub const CANONICAL_HEIGHT: u32 = 335;

/// A schedule image at exactly `CANONICAL_WIDTH` x `CANONICAL_HEIGHT`.
///
/// All row coordinates and slot sample points are defined against this size,
/// so the buffer can only be built through [`canonicalize`] or
/// [`CanonicalImage::from_rgba`], both of which enforce it.
#[derive(Debug, Clone)]
pub struct CanonicalImage {
    buffer: RgbaImage,
}

impl CanonicalImage {
    /// Wrap a buffer that is already at the canonical size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnreadableImage`] if the buffer has any other size.
    pub fn from_rgba(buffer: RgbaImage) -> crate::Result<Self> {
        let (width, height) = buffer.dimensions();
        if (width, height) != (CANONICAL_WIDTH, CANONICAL_HEIGHT) {
            return Err(crate::Error::UnreadableImage {
                width,
                height,
                reason: format!("expected {CANONICAL_WIDTH}x{CANONICAL_HEIGHT}"),
            });
        }
        Ok(Self { buffer })
    }

    /// Color of the pixel at `(x, y)`, alpha dropped.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the canonical image. Callers sample
    /// through a validated [`crate::schedule::Geometry`], which rules this out.
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb<u8> {
        let [r, g, b, _] = self.buffer.get_pixel(x, y).0;
        Rgb([r, g, b])
    }

    /// The underlying RGBA buffer.
    #[must_use]
    pub const fn as_rgba(&self) -> &RgbaImage {
        &self.buffer
    }
}
