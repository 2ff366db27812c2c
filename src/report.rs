//! Serializable views of analysis results for printing and saving.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisResult;
use crate::schedule::ClockRange;

const DATE_FORMAT: &str = "%d.%m.%Y";
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Total outage time with a human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalOutageTime {
    pub hours: u32,
    pub minutes: u32,
    pub total_minutes: u32,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInfo {
    pub outage_count: usize,
    pub analyzed_at: String,
}

/// Outage report for one queue on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueReport {
    /// Schedule date, `DD.MM.YYYY`.
    pub date: String,
    pub queue: String,
    pub outages: Vec<ClockRange>,
    pub total_outage_time: TotalOutageTime,
    pub analysis_info: AnalysisInfo,
}

impl QueueReport {
    #[must_use]
    pub fn new(result: &AnalysisResult, date: NaiveDate, analyzed_at: NaiveDateTime) -> Self {
        let outages = result.clock_ranges();
        let duration = result.duration;

        Self {
            date: date.format(DATE_FORMAT).to_string(),
            queue: result.queue.clone(),
            total_outage_time: TotalOutageTime {
                hours: duration.hours,
                minutes: duration.minutes,
                total_minutes: duration.total_minutes,
                formatted: format!("{} год {} хв", duration.hours, duration.minutes),
            },
            analysis_info: AnalysisInfo {
                outage_count: outages.len(),
                analyzed_at: analyzed_at.format(TIMESTAMP_FORMAT).to_string(),
            },
            outages,
        }
    }

    /// Parse the schedule date back out of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if `date` is not `DD.MM.YYYY`.
    pub fn parsed_date(&self) -> chrono::ParseResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
    }

    /// Pretty-printed JSON, non-ASCII text kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One line of the all-queues comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub queue: String,
    pub count: usize,
    pub hours: u32,
    pub minutes: u32,
    pub total_minutes: u32,
}

impl From<&AnalysisResult> for ComparisonEntry {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            queue: result.queue.clone(),
            count: result.intervals.len(),
            hours: result.duration.hours,
            minutes: result.duration.minutes,
            total_minutes: result.duration.total_minutes,
        }
    }
}

/// Plain-text comparison table, one queue per line in the given order.
#[must_use]
pub fn comparison_table(date: NaiveDate, entries: &[ComparisonEntry]) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<15} {:<10} {}г {}хв\n",
                entry.queue, entry.count, entry.hours, entry.minutes
            )
        })
        .collect();

    format!("Порівняння черг - {}\n\n{rows}", date.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{OutageDuration, OutageInterval};

    fn result() -> AnalysisResult {
        AnalysisResult {
            queue: "Черга 1-1".to_string(),
            intervals: vec![
                OutageInterval::new(10, 15).unwrap(),
                OutageInterval::new(44, 48).unwrap(),
            ],
            duration: OutageDuration::from_minutes(270),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    #[test]
    fn test_queue_report_json_shape() {
        let analyzed_at = date().and_hms_opt(9, 5, 0).unwrap();
        let report = QueueReport::new(&result(), date(), analyzed_at);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["date"], "12.01.2026");
        assert_eq!(value["queue"], "Черга 1-1");
        assert_eq!(value["outages"][0]["start"], "05:00");
        assert_eq!(value["outages"][0]["end"], "07:30");
        assert_eq!(value["outages"][1]["end"], "24:00");
        assert_eq!(value["total_outage_time"]["hours"], 4);
        assert_eq!(value["total_outage_time"]["minutes"], 30);
        assert_eq!(value["total_outage_time"]["total_minutes"], 270);
        assert_eq!(value["total_outage_time"]["formatted"], "4 год 30 хв");
        assert_eq!(value["analysis_info"]["outage_count"], 2);
        assert_eq!(value["analysis_info"]["analyzed_at"], "12.01.2026 09:05:00");
    }

    #[test]
    fn test_report_round_trips_date() {
        let report = QueueReport::new(&result(), date(), date().and_hms_opt(0, 0, 0).unwrap());
        let parsed: QueueReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(parsed.parsed_date().unwrap(), date());
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_comparison_table() {
        let entries = vec![
            ComparisonEntry::from(&result()),
            ComparisonEntry {
                queue: "Черга 1-2".to_string(),
                count: 0,
                hours: 0,
                minutes: 0,
                total_minutes: 0,
            },
        ];
        let table = comparison_table(date(), &entries);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Порівняння черг - 12.01.2026");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Черга 1-1       2          4г 30хв");
        assert_eq!(lines[3], "Черга 1-2       0          0г 0хв");
    }
}
