//! Mapping from half-hour slots and named rows to canonical pixel coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::image::{CANONICAL_HEIGHT, CANONICAL_WIDTH};

/// Number of half-hour slots in a day.
pub const TOTAL_SLOTS: usize = 48;

/// Horizontal layout of the slot bands in the canonical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// X coordinate where slot 0 begins.
    pub start_x: u32,

    /// Width of one half-hour band in pixels.
    pub pixels_per_slot: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            start_x: 128,
            pixels_per_slot: 24,
        }
    }
}

impl Geometry {
    /// X coordinate sampled for `slot`: the middle of its band, away from the
    /// neighbouring bands' edges.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn sample_x(&self, slot: usize) -> u32 {
        // slot < TOTAL_SLOTS, fits in u32
        self.start_x + slot as u32 * self.pixels_per_slot + self.pixels_per_slot / 2
    }

    /// Pixel coordinate sampled for `slot` on the row at `row_y`.
    #[must_use]
    pub const fn sample_point(&self, row_y: u32, slot: usize) -> (u32, u32) {
        (self.sample_x(slot), row_y)
    }

    /// Check that every slot's sample point lies inside the canonical image.
    ///
    /// # Errors
    ///
    /// Returns an error if the bands are empty or run past the right edge.
    pub fn validate(&self) -> Result<()> {
        if self.pixels_per_slot == 0 {
            return Err(Error::InvalidParameter {
                name: "pixels_per_slot".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        let last = u64::from(self.start_x)
            + (TOTAL_SLOTS as u64 - 1) * u64::from(self.pixels_per_slot)
            + u64::from(self.pixels_per_slot / 2);
        if last >= u64::from(CANONICAL_WIDTH) {
            return Err(Error::InvalidParameter {
                name: "geometry".to_string(),
                reason: format!(
                    "last slot samples x={last}, outside image width {CANONICAL_WIDTH}"
                ),
            });
        }

        Ok(())
    }
}

/// A named sub-queue and the image row its schedule is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDescriptor {
    /// Queue label, e.g. `"Черга 3-2"`.
    pub label: String,

    /// Y coordinate of the row in the canonical image.
    pub y: u32,
}

impl RowDescriptor {
    /// Row `label` drawn at height `y`.
    #[must_use]
    pub fn new(label: impl Into<String>, y: u32) -> Self {
        Self {
            label: label.into(),
            y,
        }
    }

    /// Check that the row can be sampled.
    ///
    /// # Errors
    ///
    /// Returns an error if the row lies below the canonical image.
    pub fn validate(&self) -> Result<()> {
        if self.y >= CANONICAL_HEIGHT {
            return Err(Error::InvalidParameter {
                name: format!("rows.{}", self.label),
                reason: format!("y={} is outside image height {CANONICAL_HEIGHT}", self.y),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_points_hit_band_centers() {
        let geometry = Geometry::default();

        assert_eq!(geometry.sample_point(90, 0), (140, 90));
        assert_eq!(geometry.sample_point(90, 1), (164, 90));
        assert_eq!(geometry.sample_point(315, 47), (1268, 315));
    }

    #[test]
    fn test_default_geometry_fits() {
        assert!(Geometry::default().validate().is_ok());
    }

    #[test]
    fn test_geometry_past_right_edge() {
        let geometry = Geometry {
            start_x: 200,
            pixels_per_slot: 24,
        };
        assert!(matches!(
            geometry.validate(),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_zero_width_band() {
        let geometry = Geometry {
            start_x: 128,
            pixels_per_slot: 0,
        };
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_row_below_image() {
        assert!(RowDescriptor::new("Черга 1-1", 90).validate().is_ok());
        assert!(RowDescriptor::new("Черга 9-9", CANONICAL_HEIGHT).validate().is_err());
    }
}
