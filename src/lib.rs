//! # outage-schedule
//!
//! Decodes power-outage intervals for the twelve queue groups from a
//! rasterized daily schedule graphic.
//!
//! The image is resampled to a fixed 1280x335 layout. Each queue row is then
//! sampled once per half-hour band, every sample is matched against the queue
//! palette, and the outage slots are collapsed into `[start, end)` intervals.
//!
//! ## Example
//!
//! ```no_run
//! use outage_schedule::{Analyzer, Config};
//!
//! # fn main() -> outage_schedule::Result<()> {
//! let analyzer = Analyzer::new(Config::default())?;
//!
//! let result = analyzer.process("schedule.png", "Черга 3-2")?;
//! for range in result.clock_ranges() {
//!     println!("{} - {}", range.start, range.end);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod calendar;
pub mod config;
pub mod error;
pub mod image;
pub mod report;
pub mod schedule;

pub use analyzer::{AnalysisResult, Analyzer};
pub use config::Config;
pub use error::{Error, Result};
