//! Run-length encoding of per-slot outage flags into intervals.

use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::geometry::TOTAL_SLOTS;
use super::time::{slot_to_clock, ClockRange};

/// A run of outage slots `[start, end)`, with `0 <= start < end <= 48`.
///
/// An `end` of 48 means the outage is still on at midnight. The bounds can
/// only be set through [`OutageInterval::new`], deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct OutageInterval {
    start: usize,
    end: usize,
}

#[derive(Deserialize)]
struct RawInterval {
    start: usize,
    end: usize,
}

impl TryFrom<RawInterval> for OutageInterval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end).ok_or(Error::InvalidInterval {
            start: raw.start,
            end: raw.end,
        })
    }
}

impl OutageInterval {
    /// Returns `None` unless `start < end <= TOTAL_SLOTS`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start < end && end <= TOTAL_SLOTS {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// First outage slot.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Slot after the last outage slot; 48 at the end of the day.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of half-hour slots covered.
    #[must_use]
    pub const fn len_slots(&self) -> usize {
        self.end - self.start
    }

    /// Start and end as `HH:MM` strings.
    #[must_use]
    pub fn to_clock_range(&self) -> ClockRange {
        ClockRange {
            start: slot_to_clock(self.start),
            end: slot_to_clock(self.end),
        }
    }
}

/// Collapse a day of slot flags into maximal outage intervals, in slot order.
///
/// Only the first [`TOTAL_SLOTS`] flags are read. A run still open after the
/// last flag read is closed there, which for a full day is the end-of-day
/// sentinel 48.
pub fn compress<I>(flags: I) -> Vec<OutageInterval>
where
    I: IntoIterator<Item = bool>,
{
    let mut intervals = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut slots = 0;

    for (slot, outage) in flags.into_iter().take(TOTAL_SLOTS).enumerate() {
        match (outage, run_start) {
            (true, None) => run_start = Some(slot),
            (false, Some(start)) => {
                intervals.push(OutageInterval { start, end: slot });
                run_start = None;
            }
            _ => {}
        }
        slots = slot + 1;
    }

    if let Some(start) = run_start {
        intervals.push(OutageInterval { start, end: slots });
    }

    intervals
}

/// Inverse of [`compress`]: one flag per slot of the day.
#[must_use]
pub fn expand(intervals: &[OutageInterval]) -> [bool; TOTAL_SLOTS] {
    let mut flags = [false; TOTAL_SLOTS];
    for interval in intervals {
        flags[interval.start..interval.end].fill(true);
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: usize, end: usize) -> OutageInterval {
        OutageInterval::new(start, end).unwrap()
    }

    #[test]
    fn test_all_false_is_empty() {
        assert!(compress([false; TOTAL_SLOTS]).is_empty());
    }

    #[test]
    fn test_all_true_is_whole_day() {
        assert_eq!(compress([true; TOTAL_SLOTS]), vec![iv(0, 48)]);
    }

    #[test]
    fn test_single_morning_outage() {
        let flags: Vec<bool> = std::iter::repeat(false)
            .take(10)
            .chain(std::iter::repeat(true).take(5))
            .chain(std::iter::repeat(false).take(33))
            .collect();
        assert_eq!(flags.len(), TOTAL_SLOTS);

        let intervals = compress(flags);
        assert_eq!(intervals, vec![iv(10, 15)]);
        assert_eq!(
            intervals[0].to_clock_range(),
            ClockRange::new("05:00", "07:30")
        );
    }

    #[test]
    fn test_outage_running_into_midnight() {
        let mut flags = [false; TOTAL_SLOTS];
        flags[0] = true;
        flags[1] = true;
        flags[44..].fill(true);

        let intervals = compress(flags);
        assert_eq!(intervals, vec![iv(0, 2), iv(44, 48)]);
        assert_eq!(
            intervals[1].to_clock_range(),
            ClockRange::new("22:00", "24:00")
        );
    }

    #[test]
    fn test_alternating_slots() {
        let flags: Vec<bool> = (0..TOTAL_SLOTS).map(|i| i % 2 == 1).collect();
        let intervals = compress(flags);

        assert_eq!(intervals.len(), 24);
        assert!(intervals
            .iter()
            .all(|i| i.len_slots() == 1 && i.start() % 2 == 1));
    }

    #[test]
    fn test_flags_past_end_of_day_are_ignored() {
        let intervals = compress(std::iter::repeat(true).take(60));
        assert_eq!(intervals, vec![iv(0, 48)]);
        assert_eq!(expand(&intervals), [true; TOTAL_SLOTS]);

        let mut flags = vec![false; 60];
        flags[50..55].fill(true);
        assert!(compress(flags).is_empty());
    }

    #[test]
    fn test_interval_bounds() {
        assert!(OutageInterval::new(0, 48).is_some());
        assert!(OutageInterval::new(5, 5).is_none());
        assert!(OutageInterval::new(6, 5).is_none());
        assert!(OutageInterval::new(47, 49).is_none());
        assert_eq!((iv(3, 9).start(), iv(3, 9).end()), (3, 9));
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let interval: OutageInterval = serde_json::from_str(r#"{"start":10,"end":15}"#).unwrap();
        assert_eq!(interval, iv(10, 15));
        assert_eq!(
            serde_json::to_string(&interval).unwrap(),
            r#"{"start":10,"end":15}"#
        );

        for json in [
            r#"{"start":50,"end":60}"#,
            r#"{"start":10,"end":5}"#,
            r#"{"start":7,"end":7}"#,
        ] {
            let err = serde_json::from_str::<OutageInterval>(json).unwrap_err();
            assert!(err.to_string().contains("invalid outage interval"), "{err}");
        }
    }

    proptest! {
        #[test]
        fn prop_compress_is_sorted_disjoint_and_maximal(
            flags in proptest::collection::vec(any::<bool>(), TOTAL_SLOTS)
        ) {
            let intervals = compress(flags.iter().copied());

            for interval in &intervals {
                prop_assert!(interval.start() < interval.end());
                prop_assert!(interval.end() <= TOTAL_SLOTS);
            }
            // Strictly increasing with a gap: no overlap and no adjacency.
            for pair in intervals.windows(2) {
                prop_assert!(pair[0].end() < pair[1].start());
            }
            prop_assert_eq!(expand(&intervals).to_vec(), flags);
        }

        #[test]
        fn prop_expand_compress_is_idempotent(
            flags in proptest::collection::vec(any::<bool>(), TOTAL_SLOTS)
        ) {
            let once = compress(flags);
            let twice = compress(expand(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_compress_never_exceeds_day(
            flags in proptest::collection::vec(any::<bool>(), 0..100)
        ) {
            for interval in compress(flags) {
                prop_assert_eq!(
                    OutageInterval::new(interval.start(), interval.end()),
                    Some(interval)
                );
            }
        }
    }
}
