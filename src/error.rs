//! Custom error types for outage-schedule.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the outage-schedule library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to decode an in-memory image.
    #[error("failed to decode image: {source}")]
    ImageDecode {
        #[source]
        source: image::ImageError,
    },

    /// The image decoded but cannot be analyzed.
    #[error("unreadable image {width}x{height}: {reason}")]
    UnreadableImage {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// No row with this label exists in the configuration.
    #[error("unknown queue {0:?}")]
    UnknownQueue(String),

    /// A clock string is not `HH:MM`.
    #[error("invalid clock time {0:?}, expected HH:MM")]
    InvalidClock(String),

    /// Slot bounds outside `0 <= start < end <= 48`.
    #[error("invalid outage interval [{start}, {end})")]
    InvalidInterval { start: usize, end: usize },

    /// A clock range ends before it starts.
    #[error("outage range {start} - {end} ends before it starts")]
    ReversedRange { start: String, end: String },

    /// There are no outage intervals to turn into calendar events.
    #[error("no outages to export for {queue}")]
    NoOutages { queue: String },

    /// Failed to parse a configuration file.
    #[error("failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for outage-schedule operations.
pub type Result<T> = std::result::Result<T, Error>;
