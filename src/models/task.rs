//! Maintenance task model.
//!
//! A task is one scheduled piece of maintenance work on a piece of
//! equipment. Tasks arrive from the record store already decoded; the
//! due date is kept as the raw string the store sent, because a malformed
//! date must still classify (as `Unknown`) rather than fail decoding.
//!
//! # Date Formats
//! - ISO calendar date: `2024-05-01`
//! - RFC 3339 timestamp: `2024-05-01T08:30:00Z`, `2024-05-01T08:30:00+09:00`
//! - Naive timestamp: `2024-05-01T08:30:00` (wall clock, zone implied)
//!
//! Timestamps with an offset are moved into the calendar zone before the
//! date is taken. Naive timestamps keep their wall-clock date.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maintenance task as supplied by the task store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    /// Unique task identifier.
    pub id: String,
    /// Equipment the work is scheduled on.
    pub equipment_id: String,
    /// What needs doing.
    pub description: String,
    /// Raw due date as received (see module docs for accepted formats).
    #[serde(alias = "task_date")]
    pub due_date: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
}

impl MaintenanceTask {
    /// Creates a pending task due on the given date string.
    pub fn new(id: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            equipment_id: String::new(),
            description: String::new(),
            due_date: due_date.into(),
            status: TaskStatus::Pending,
        }
    }

    /// Creates a pending task due on a calendar date.
    pub fn due_on(id: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(id, date.format("%Y-%m-%d").to_string())
    }

    /// Sets the equipment reference.
    pub fn with_equipment(mut self, equipment_id: impl Into<String>) -> Self {
        self.equipment_id = equipment_id.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// The calendar day this task is due, as seen from `zone`.
    ///
    /// Returns `None` when the due date cannot be parsed.
    pub fn due_day(&self, zone: &FixedOffset) -> Option<NaiveDate> {
        parse_calendar_date(&self.due_date, zone)
    }
}

/// Parses a due-date string into a calendar day in `zone`.
pub fn parse_calendar_date(raw: &str, zone: &FixedOffset) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Some(instant.with_timezone(zone).date_naive());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_builder() {
        let task = MaintenanceTask::new("T1", "2024-05-01")
            .with_equipment("EQ-7")
            .with_description("Replace spindle bearing")
            .with_status(TaskStatus::InProgress);

        assert_eq!(task.id, "T1");
        assert_eq!(task.equipment_id, "EQ-7");
        assert_eq!(task.description, "Replace spindle bearing");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_due_on_formats_iso() {
        let task = MaintenanceTask::due_on("T1", ymd(2024, 2, 9));
        assert_eq!(task.due_date, "2024-02-09");
        assert_eq!(task.due_day(&utc()), Some(ymd(2024, 2, 9)));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_calendar_date("2024-05-01", &utc()), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_calendar_date(" 2024-05-01 ", &utc()), Some(ymd(2024, 5, 1)));
    }

    #[test]
    fn test_parse_rfc3339_moves_into_zone() {
        let raw = "2024-05-01T22:00:00Z";
        assert_eq!(parse_calendar_date(raw, &utc()), Some(ymd(2024, 5, 1)));

        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(parse_calendar_date(raw, &seoul), Some(ymd(2024, 5, 2)));
    }

    #[test]
    fn test_parse_naive_timestamp_keeps_wall_date() {
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            parse_calendar_date("2024-05-01T23:30:00.000", &seoul),
            Some(ymd(2024, 5, 1))
        );
    }

    #[test]
    fn test_parse_malformed() {
        for raw in ["", "   ", "tomorrow", "2024-13-01", "2024-02-30", "01/05/2024"] {
            assert_eq!(parse_calendar_date(raw, &utc()), None, "{raw:?}");
        }
    }

    #[test]
    fn test_status_wire_names() {
        let s: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(s, TaskStatus::InProgress);
        let s: TaskStatus = serde_json::from_str("\"InProgress\"").unwrap();
        assert_eq!(s, TaskStatus::InProgress);
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn test_deserialize_store_record() {
        let json = r#"{
            "id": "42",
            "equipment_id": "EQ-1",
            "description": "Lubricate conveyor",
            "task_date": "2024-06-10",
            "status": "Pending"
        }"#;
        let task: MaintenanceTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.due_date, "2024-06-10");
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
