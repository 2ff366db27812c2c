//! Image loading utilities.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, GenericImageView};

use crate::error::{Error, Result};

use super::{CanonicalImage, CANONICAL_HEIGHT, CANONICAL_WIDTH};

/// Load a schedule image from disk and normalize it to the canonical size.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, or if the
/// decoded image has no pixels.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<CanonicalImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());

    canonicalize(&img)
}

/// Decode an encoded image (PNG, JPEG, ...) held in memory.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image or decode to an
/// empty image.
pub fn decode_image(bytes: &[u8]) -> Result<CanonicalImage> {
    let img = image::load_from_memory(bytes).map_err(|source| Error::ImageDecode { source })?;
    canonicalize(&img)
}

/// Resample a decoded image to the canonical size.
///
/// Images already at the canonical size are used as-is; anything else goes
/// through Lanczos3 so the flat color bands keep their hue.
///
/// # Errors
///
/// Returns [`Error::UnreadableImage`] for a zero-sized image.
pub fn canonicalize(img: &DynamicImage) -> Result<CanonicalImage> {
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::UnreadableImage {
            width,
            height,
            reason: "image has no pixels".to_string(),
        });
    }

    let rgba = if (width, height) == (CANONICAL_WIDTH, CANONICAL_HEIGHT) {
        img.to_rgba8()
    } else {
        tracing::debug!("Resampling {width}x{height} to {CANONICAL_WIDTH}x{CANONICAL_HEIGHT}");
        img.resize_exact(CANONICAL_WIDTH, CANONICAL_HEIGHT, FilterType::Lanczos3)
            .to_rgba8()
    };

    CanonicalImage::from_rgba(rgba)
}
