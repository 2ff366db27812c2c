//! Analyzer configuration: palette, threshold, row table and band geometry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schedule::{Geometry, ReferenceColor, RowDescriptor, DEFAULT_THRESHOLD};

/// Everything the analyzer needs to know about the schedule graphic.
///
/// Built once and handed to [`crate::Analyzer::new`]; it is never changed
/// afterwards. Every field has a default matching the published schedule
/// layout, so a TOML file only has to name what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum RGB distance to a palette color that still counts as an outage.
    pub threshold: f64,

    /// Palette the outage bands are painted in.
    pub reference_colors: Vec<ReferenceColor>,

    /// Queue rows, in display order.
    pub rows: Vec<RowDescriptor>,

    /// Horizontal layout of the half-hour bands.
    pub geometry: Geometry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reference_colors: vec![
                ReferenceColor::new([254, 255, 3], "Черга 1"),
                ReferenceColor::new([146, 210, 74], "Черга 2"),
                ReferenceColor::new([253, 193, 0], "Черга 3"),
                ReferenceColor::new([0, 178, 237], "Черга 4"),
                ReferenceColor::new([236, 126, 49], "Черга 5"),
                ReferenceColor::new([179, 126, 218], "Черга 6"),
            ],
            rows: vec![
                RowDescriptor::new("Черга 1-1", 90),
                RowDescriptor::new("Черга 1-2", 109),
                RowDescriptor::new("Черга 2-1", 127),
                RowDescriptor::new("Черга 2-2", 146),
                RowDescriptor::new("Черга 3-1", 170),
                RowDescriptor::new("Черга 3-2", 190),
                RowDescriptor::new("Черга 4-1", 214),
                RowDescriptor::new("Черга 4-2", 233),
                RowDescriptor::new("Черга 5-1", 255),
                RowDescriptor::new("Черга 5-2", 275),
                RowDescriptor::new("Черга 6-1", 298),
                RowDescriptor::new("Черга 6-2", 315),
            ],
            geometry: Geometry::default(),
        }
    }
}

impl Config {
    /// Read a configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result does not validate.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let config: Self = toml::from_str(&text).map_err(|source| Error::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }

        if self.reference_colors.is_empty() {
            return Err(Error::InvalidParameter {
                name: "reference_colors".to_string(),
                reason: "at least one color is required".to_string(),
            });
        }

        if self.rows.is_empty() {
            return Err(Error::InvalidParameter {
                name: "rows".to_string(),
                reason: "at least one row is required".to_string(),
            });
        }

        for (i, row) in self.rows.iter().enumerate() {
            row.validate()?;
            if self.rows[..i].iter().any(|other| other.label == row.label) {
                return Err(Error::InvalidParameter {
                    name: "rows".to_string(),
                    reason: format!("duplicate label {:?}", row.label),
                });
            }
        }

        self.geometry.validate()
    }

    /// Row with the given label.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&RowDescriptor> {
        self.rows.iter().find(|row| row.label == label)
    }
}
