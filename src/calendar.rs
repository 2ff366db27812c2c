//! Calendar event records for decoded outages.
//!
//! Each outage becomes one event on the schedule date with two display
//! reminders before it starts. Only the records are built here; turning them
//! into an `.ics` file is left to the caller.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::schedule::{clock_to_minutes, ClockRange};

/// Time zone the schedules are published in.
pub const TIMEZONE: &str = "Europe/Kiev";

/// Minutes before an outage at which a reminder fires.
pub const REMINDER_OFFSETS: [i64; 2] = [15, 5];

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub minutes_before: i64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Confirmed,
}

/// One scheduled outage, in local time of [`TIMEZONE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutageEvent {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub status: EventStatus,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub reminders: Vec<Reminder>,
}

impl OutageEvent {
    /// When each reminder fires.
    #[must_use]
    pub fn reminder_times(&self) -> Vec<NaiveDateTime> {
        self.reminders
            .iter()
            .map(|r| self.start - Duration::minutes(r.minutes_before))
            .collect()
    }
}

/// All outage events of one queue, ready for a calendar writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSchedule {
    pub calendar_name: String,
    pub timezone: String,
    pub queue: String,
    pub date: NaiveDate,
    pub events: Vec<OutageEvent>,
}

impl EventSchedule {
    /// Build one event per outage range on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoOutages`] when `outages` is empty and
    /// [`Error::InvalidClock`] for a malformed range.
    pub fn new(date: NaiveDate, queue: &str, outages: &[ClockRange]) -> Result<Self> {
        if outages.is_empty() {
            return Err(Error::NoOutages {
                queue: queue.to_string(),
            });
        }

        let events = outages
            .iter()
            .map(|range| build_event(date, queue, range))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Built {} calendar events for {queue}", events.len());

        Ok(Self {
            calendar_name: format!("Графік відключень - {queue}"),
            timezone: TIMEZONE.to_string(),
            queue: queue.to_string(),
            date,
            events,
        })
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn build_event(date: NaiveDate, queue: &str, range: &ClockRange) -> Result<OutageEvent> {
    let start = at_clock(date, &range.start)?;
    let end = at_clock(date, &range.end)?;

    Ok(OutageEvent {
        summary: format!("[!] Відключення електроенергії - {queue}"),
        description: format!(
            "Планове відключення електроенергії\nЧерга: {queue}\nЧас: {} - {}",
            range.start, range.end
        ),
        location: "Україна".to_string(),
        status: EventStatus::Confirmed,
        start,
        end,
        reminders: REMINDER_OFFSETS
            .iter()
            .map(|&minutes_before| Reminder {
                minutes_before,
                description: format!("[!] Відключення через {minutes_before} хвилин - {queue}"),
            })
            .collect(),
    })
}

/// `date` at the wall-clock time `clock`; `24:00` is midnight of the next day.
fn at_clock(date: NaiveDate, clock: &str) -> Result<NaiveDateTime> {
    let minutes = clock_to_minutes(clock)?;

    if minutes == MINUTES_PER_DAY {
        return Ok((date + Duration::days(1)).and_time(NaiveTime::MIN));
    }

    let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .ok_or_else(|| Error::InvalidClock(clock.to_string()))?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_events_for_each_outage() {
        let schedule = EventSchedule::new(
            date(),
            "Черга 3-2",
            &[
                ClockRange::new("05:00", "07:30"),
                ClockRange::new("22:00", "24:00"),
            ],
        )
        .unwrap();

        assert_eq!(schedule.calendar_name, "Графік відключень - Черга 3-2");
        assert_eq!(schedule.timezone, TIMEZONE);
        assert_eq!(schedule.events.len(), 2);

        let first = &schedule.events[0];
        assert_eq!(first.start, at(12, 5, 0));
        assert_eq!(first.end, at(12, 7, 30));
        assert_eq!(first.summary, "[!] Відключення електроенергії - Черга 3-2");
        assert_eq!(
            first.description,
            "Планове відключення електроенергії\nЧерга: Черга 3-2\nЧас: 05:00 - 07:30"
        );
        assert_eq!(first.status, EventStatus::Confirmed);
    }

    #[test]
    fn test_end_of_day_rolls_to_next_midnight() {
        let schedule =
            EventSchedule::new(date(), "Черга 1-1", &[ClockRange::new("22:00", "24:00")]).unwrap();

        assert_eq!(schedule.events[0].start, at(12, 22, 0));
        assert_eq!(schedule.events[0].end, at(13, 0, 0));
    }

    #[test]
    fn test_reminders() {
        let schedule =
            EventSchedule::new(date(), "Черга 1-1", &[ClockRange::new("00:00", "02:00")]).unwrap();
        let event = &schedule.events[0];

        let offsets: Vec<i64> = event.reminders.iter().map(|r| r.minutes_before).collect();
        assert_eq!(offsets, vec![15, 5]);
        assert_eq!(
            event.reminders[0].description,
            "[!] Відключення через 15 хвилин - Черга 1-1"
        );
        // A midnight outage reminds on the evening before.
        assert_eq!(
            event.reminder_times(),
            vec![at(11, 23, 45), at(11, 23, 55)]
        );
    }

    #[test]
    fn test_no_outages_is_an_error() {
        assert!(matches!(
            EventSchedule::new(date(), "Черга 1-1", &[]),
            Err(Error::NoOutages { .. })
        ));
    }

    #[test]
    fn test_json_status() {
        let schedule =
            EventSchedule::new(date(), "Черга 1-1", &[ClockRange::new("05:00", "06:00")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&schedule.to_json().unwrap()).unwrap();

        assert_eq!(value["events"][0]["status"], "CONFIRMED");
        assert_eq!(value["events"][0]["start"], "2026-01-12T05:00:00");
        assert_eq!(value["date"], "2026-01-12");
    }
}
