//! Outage classification by distance to the queue palette.

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default maximum RGB distance at which a pixel still matches a queue color.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// One of the palette colors used to paint outage bands.
///
/// The label names the queue group the color belongs to. It is descriptive
/// only: classification never needs to know which queue matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceColor {
    /// Palette color as `[r, g, b]`.
    pub rgb: [u8; 3],

    /// Queue group painted in this color, e.g. `"Черга 1"`.
    pub label: String,
}

impl ReferenceColor {
    /// Palette entry `rgb` for queue group `label`.
    #[must_use]
    pub fn new(rgb: [u8; 3], label: impl Into<String>) -> Self {
        Self {
            rgb,
            label: label.into(),
        }
    }
}

/// Euclidean distance between two colors in RGB space.
#[must_use]
pub fn rgb_distance(a: Rgb<u8>, b: Rgb<u8>) -> f64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Decides whether a sampled pixel is painted in any outage color.
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    references: Vec<Rgb<u8>>,
    threshold: f64,
}

impl ColorClassifier {
    /// Classifier for the given palette and distance threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or the threshold is not a
    /// positive finite number.
    pub fn new(references: &[ReferenceColor], threshold: f64) -> Result<Self> {
        if references.is_empty() {
            return Err(Error::InvalidParameter {
                name: "reference_colors".to_string(),
                reason: "at least one color is required".to_string(),
            });
        }

        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        Ok(Self {
            references: references.iter().map(|c| Rgb(c.rgb)).collect(),
            threshold,
        })
    }

    /// Distance a pixel must stay under to count as an outage.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True when the nearest palette color is strictly closer than the
    /// threshold. A pixel close to several palette colors is still an outage.
    #[must_use]
    pub fn is_outage(&self, pixel: Rgb<u8>) -> bool {
        self.references
            .iter()
            .map(|&reference| rgb_distance(pixel, reference))
            .fold(f64::INFINITY, f64::min)
            < self.threshold
    }
}
