//! Outage analysis of a whole schedule image.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::image::{self, CanonicalImage};
use crate::schedule::{
    compress, queue_sort_key, scan_row, total_duration, ClockRange, ColorClassifier,
    OutageDuration, OutageInterval, RowDescriptor,
};

/// Outages decoded for one queue row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub queue: String,
    pub intervals: Vec<OutageInterval>,
    pub duration: OutageDuration,
}

impl AnalysisResult {
    /// Intervals as `HH:MM` ranges, in order.
    #[must_use]
    pub fn clock_ranges(&self) -> Vec<ClockRange> {
        self.intervals
            .iter()
            .map(OutageInterval::to_clock_range)
            .collect()
    }

    #[must_use]
    pub fn has_outages(&self) -> bool {
        !self.intervals.is_empty()
    }
}

/// Decodes outage intervals from schedule images.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
    classifier: ColorClassifier,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            "Initializing analyzer: {} rows, {} colors, threshold {}",
            config.rows.len(),
            config.reference_colors.len(),
            config.threshold
        );

        let classifier = ColorClassifier::new(&config.reference_colors, config.threshold)?;

        Ok(Self { config, classifier })
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Decode one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row lies outside the canonical image.
    pub fn analyze_row(&self, img: &CanonicalImage, row: &RowDescriptor) -> Result<AnalysisResult> {
        row.validate()?;

        let flags = scan_row(img, &self.config.geometry, &self.classifier, row.y);
        let intervals = compress(flags);

        let ranges: Vec<ClockRange> = intervals
            .iter()
            .map(OutageInterval::to_clock_range)
            .collect();
        let duration = total_duration(&ranges)?;

        tracing::debug!(
            "{}: {} outages, {} min",
            row.label,
            intervals.len(),
            duration.total_minutes
        );

        Ok(AnalysisResult {
            queue: row.label.clone(),
            intervals,
            duration,
        })
    }

    /// Decode the row configured under `queue`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownQueue`] if no row has that label.
    pub fn analyze_queue(&self, img: &CanonicalImage, queue: &str) -> Result<AnalysisResult> {
        let row = self
            .config
            .row(queue)
            .ok_or_else(|| Error::UnknownQueue(queue.to_string()))?;
        self.analyze_row(img, row)
    }

    /// Decode every configured row, ordered by queue number.
    ///
    /// # Errors
    ///
    /// Returns an error if any row fails to decode.
    pub fn analyze_all(&self, img: &CanonicalImage) -> Result<Vec<AnalysisResult>> {
        let mut results = self
            .config
            .rows
            .iter()
            .map(|row| self.analyze_row(img, row))
            .collect::<Result<Vec<_>>>()?;

        results.sort_by_key(|result| queue_sort_key(&result.queue));
        Ok(results)
    }

    /// Load an image file and decode the row configured under `queue`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read or the queue is unknown.
    pub fn process<P: AsRef<Path>>(&self, input_path: P, queue: &str) -> Result<AnalysisResult> {
        let input_path = input_path.as_ref();
        tracing::info!("Analyzing {} for {queue}", input_path.display());

        let img = image::load_image(input_path)?;
        self.analyze_queue(&img, queue)
    }

    /// Load an image file and decode every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read.
    pub fn process_all<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<AnalysisResult>> {
        let input_path = input_path.as_ref();
        tracing::info!("Analyzing all queues in {}", input_path.display());

        let img = image::load_image(input_path)?;
        self.analyze_all(&img)
    }
}
