//! Decoding of outage intervals from one row of a schedule image.
//!
//! A row is sampled once per half-hour slot ([`Geometry`]), each sample is
//! classified against the queue palette ([`ColorClassifier`]), and the
//! resulting flags are run-length encoded into [`OutageInterval`]s.

mod color;
mod geometry;
mod interval;
mod scanner;
mod time;

pub use color::{rgb_distance, ColorClassifier, ReferenceColor, DEFAULT_THRESHOLD};
pub use geometry::{Geometry, RowDescriptor, TOTAL_SLOTS};
pub use interval::{compress, expand, OutageInterval};
pub use scanner::scan_row;
pub use time::{
    clock_to_minutes, queue_sort_key, slot_to_clock, total_duration, ClockRange, OutageDuration,
    UNPARSEABLE_QUEUE_KEY,
};
