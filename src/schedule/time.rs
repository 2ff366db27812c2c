//! Clock formatting, outage duration totals and queue ordering.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::geometry::TOTAL_SLOTS;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Sort key given to queue labels without a `<main>-<sub>` number.
pub const UNPARSEABLE_QUEUE_KEY: (u32, u32) = (99, 99);

/// An outage as wall-clock strings, e.g. `{"start": "05:00", "end": "07:30"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockRange {
    pub start: String,
    pub end: String,
}

impl ClockRange {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Total outage time of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutageDuration {
    pub hours: u32,
    pub minutes: u32,
    pub total_minutes: u32,
}

impl OutageDuration {
    #[must_use]
    pub const fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }
}

/// Format a slot boundary in `0..=48` as `HH:MM`. Slot 48 is the end of the
/// day, `24:00`.
#[must_use]
pub fn slot_to_clock(slot: usize) -> String {
    debug_assert!(slot <= TOTAL_SLOTS, "slot {slot} is past the end of the day");
    let hours = slot / 2;
    let minutes = if slot % 2 == 1 { 30 } else { 0 };
    format!("{hours:02}:{minutes:02}")
}

/// Parse `HH:MM` into minutes since midnight. `24:00` is accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidClock`] for anything else.
pub fn clock_to_minutes(clock: &str) -> Result<u32> {
    let invalid = || Error::InvalidClock(clock.to_string());

    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    if minutes >= 60 || hours > 24 || (hours == 24 && minutes != 0) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Sum the length of every range.
///
/// An end of `00:00` is read as midnight at the end of the day, so a range
/// that runs into the next day never counts negative.
///
/// # Errors
///
/// Returns [`Error::InvalidClock`] if a start or end is not `HH:MM`, and
/// [`Error::ReversedRange`] if a range ends before it starts.
pub fn total_duration(ranges: &[ClockRange]) -> Result<OutageDuration> {
    let mut total = 0;

    for range in ranges {
        let start = clock_to_minutes(&range.start)?;
        let end = match clock_to_minutes(&range.end)? {
            0 => MINUTES_PER_DAY,
            end => end,
        };
        if end < start {
            return Err(Error::ReversedRange {
                start: range.start.clone(),
                end: range.end.clone(),
            });
        }
        total += end - start;
    }

    Ok(OutageDuration::from_minutes(total))
}

/// Ordering key for labels like `"Черга 3-2"`: `(3, 2)`.
///
/// Labels without a second word of the form `<int>-<int>` sort last.
#[must_use]
pub fn queue_sort_key(label: &str) -> (u32, u32) {
    let Some(number) = label.split_whitespace().nth(1) else {
        return UNPARSEABLE_QUEUE_KEY;
    };

    let mut parts = number.split('-');
    match (
        parts.next().and_then(|p| p.parse::<u32>().ok()),
        parts.next().and_then(|p| p.parse::<u32>().ok()),
    ) {
        (Some(main), Some(sub)) => (main, sub),
        _ => UNPARSEABLE_QUEUE_KEY,
    }
}
