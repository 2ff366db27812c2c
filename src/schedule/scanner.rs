//! Sampling of one schedule row into per-slot outage flags.

use crate::image::CanonicalImage;

use super::color::ColorClassifier;
use super::geometry::{Geometry, TOTAL_SLOTS};

/// Classify the middle pixel of every half-hour band on the row at `row_y`.
///
/// The returned iterator is lazy and yields exactly [`TOTAL_SLOTS`] flags in
/// slot order. Calling again with the same arguments yields the same flags.
pub fn scan_row<'a>(
    image: &'a CanonicalImage,
    geometry: &'a Geometry,
    classifier: &'a ColorClassifier,
    row_y: u32,
) -> impl Iterator<Item = bool> + 'a {
    (0..TOTAL_SLOTS).map(move |slot| {
        let (x, y) = geometry.sample_point(row_y, slot);
        classifier.is_outage(image.rgb(x, y))
    })
}
