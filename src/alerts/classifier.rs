//! Temporal classifier: task + reference instant → alert.
//!
//! # Algorithm
//!
//! 1. A completed task is `Completed`, whatever its due date says.
//! 2. Both the due date and `now` are reduced to a calendar day in the
//!    configured zone, dropping the time of day on both sides.
//! 3. `days = due_day - today` (whole days, so no rounding is involved).
//! 4. First match wins: `< 0` Overdue, `0` DueToday, `1..=soon` UpcomingSoon,
//!    `..=week` UpcomingWeek, otherwise OnSchedule.
//! 5. An unparseable due date is `Unknown`.
//!
//! The classifier never reads a clock. Two instants on the same calendar
//! day always produce the same alert.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::config::AlertConfig;
use crate::models::{Alert, AlertTier, MaintenanceTask};

/// Classifier bound to one set of thresholds and one calendar zone.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: AlertConfig,
}

impl Classifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: AlertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// The calendar day containing `now` in the configured zone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.config.zone()).date_naive()
    }

    /// The calendar day `task` is due, or `None` if unparseable.
    pub fn due_day(&self, task: &MaintenanceTask) -> Option<NaiveDate> {
        task.due_day(&self.config.zone())
    }

    /// Classifies `task` relative to the instant `now`.
    pub fn classify(&self, task: &MaintenanceTask, now: DateTime<Utc>) -> Alert {
        self.classify_on(task, self.today(now))
    }

    /// Classifies `task` relative to an already-normalized calendar day.
    pub fn classify_on(&self, task: &MaintenanceTask, today: NaiveDate) -> Alert {
        if task.is_completed() {
            return completed_alert();
        }

        match self.due_day(task) {
            Some(due) => self.alert_for_days((due - today).num_days()),
            None => {
                debug!(task_id = %task.id, due_date = %task.due_date, "unparseable due date");
                unknown_alert()
            }
        }
    }

    /// Tier for a signed day delta.
    pub fn tier_for_days(&self, days_until_due: i64) -> AlertTier {
        if days_until_due < 0 {
            AlertTier::Overdue
        } else if days_until_due == 0 {
            AlertTier::DueToday
        } else if days_until_due <= self.config.soon_days {
            AlertTier::UpcomingSoon
        } else if days_until_due <= self.config.week_days {
            AlertTier::UpcomingWeek
        } else {
            AlertTier::OnSchedule
        }
    }

    fn alert_for_days(&self, days: i64) -> Alert {
        let tier = self.tier_for_days(days);
        let message = match tier {
            AlertTier::Overdue => {
                let n = days.unsigned_abs();
                format!("OVERDUE by {n} {}! Complete immediately!", day_word(n))
            }
            AlertTier::DueToday => "Due today - Start immediately!".to_string(),
            AlertTier::UpcomingSoon => {
                let n = days.unsigned_abs();
                format!("Due in {n} {} - Prepare to start", day_word(n))
            }
            AlertTier::UpcomingWeek => format!("Due in {days} days - Coming up"),
            _ => "On schedule".to_string(),
        };
        Alert::new(tier, message, Some(days))
    }
}

/// Classifies with the default configuration (UTC calendar, 3/7-day tiers).
pub fn classify(task: &MaintenanceTask, now: DateTime<Utc>) -> Alert {
    Classifier::default().classify(task, now)
}

fn completed_alert() -> Alert {
    Alert::new(
        AlertTier::Completed,
        "Task completed successfully".to_string(),
        None,
    )
}

fn unknown_alert() -> Alert {
    Alert::new(AlertTier::Unknown, "Due date unavailable".to_string(), None)
}

fn day_word(n: u64) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlertConfig;
    use crate::models::TaskStatus;
    use chrono::{Duration, TimeZone};
    use rand::Rng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn now_at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&today().and_hms_opt(h, m, s).unwrap())
    }

    fn due_in(days: i64) -> MaintenanceTask {
        MaintenanceTask::due_on("T", today() + Duration::days(days))
    }

    #[test]
    fn test_completed_overrides_due_date() {
        let now = now_at(9, 0, 0);
        for task in [due_in(-1), due_in(1), due_in(0), MaintenanceTask::new("T", "garbage")] {
            let alert = classify(&task.with_status(TaskStatus::Completed), now);
            assert_eq!(alert.tier, AlertTier::Completed);
            assert_eq!(alert.message, "Task completed successfully");
            assert_eq!(alert.icon, "✓");
            assert_eq!(alert.days_until_due, None);
        }
    }

    #[test]
    fn test_overdue_singular_and_plural() {
        let now = now_at(12, 0, 0);

        let one = classify(&due_in(-1), now);
        assert_eq!(one.tier, AlertTier::Overdue);
        assert_eq!(one.overdue_days(), Some(1));
        assert_eq!(one.message, "OVERDUE by 1 day! Complete immediately!");

        let many = classify(&due_in(-12), now);
        assert_eq!(many.overdue_days(), Some(12));
        assert_eq!(many.message, "OVERDUE by 12 days! Complete immediately!");
    }

    #[test]
    fn test_tier_boundaries() {
        let now = now_at(8, 0, 0);
        let cases = [
            (0, AlertTier::DueToday),
            (1, AlertTier::UpcomingSoon),
            (3, AlertTier::UpcomingSoon),
            (4, AlertTier::UpcomingWeek),
            (7, AlertTier::UpcomingWeek),
            (8, AlertTier::OnSchedule),
            (365, AlertTier::OnSchedule),
        ];
        for (days, tier) in cases {
            let alert = classify(&due_in(days), now);
            assert_eq!(alert.tier, tier, "days={days}");
            assert_eq!(alert.days_until_due, Some(days));
        }
    }

    #[test]
    fn test_messages() {
        let now = now_at(8, 0, 0);
        assert_eq!(classify(&due_in(0), now).message, "Due today - Start immediately!");
        assert_eq!(classify(&due_in(1), now).message, "Due in 1 day - Prepare to start");
        assert_eq!(classify(&due_in(3), now).message, "Due in 3 days - Prepare to start");
        assert_eq!(classify(&due_in(5), now).message, "Due in 5 days - Coming up");
        assert_eq!(classify(&due_in(20), now).message, "On schedule");
    }

    #[test]
    fn test_no_hour_of_day_leakage() {
        for days in [-3, -1, 0, 1, 3, 4, 7, 8] {
            let task = due_in(days);
            let first = classify(&task, now_at(0, 0, 0));
            let last = classify(&task, now_at(23, 59, 59));
            assert_eq!(first, last, "days={days}");
        }
    }

    #[test]
    fn test_no_leakage_random_instants() {
        let mut rng = rand::rng();
        let task = due_in(2);
        let expected = classify(&task, now_at(0, 0, 0));
        for _ in 0..200 {
            let now = now_at(
                rng.random_range(0..24),
                rng.random_range(0..60),
                rng.random_range(0..60),
            ) + Duration::milliseconds(rng.random_range(0..1000));
            assert_eq!(classify(&task, now), expected);
        }
    }

    #[test]
    fn test_timestamp_due_date_truncated() {
        let now = now_at(6, 0, 0);
        let task = MaintenanceTask::new("T", "2024-03-15T23:30:00Z");
        assert_eq!(classify(&task, now).tier, AlertTier::DueToday);

        let task = MaintenanceTask::new("T", "2024-03-14T23:59:59.999Z");
        assert_eq!(classify(&task, now).tier, AlertTier::Overdue);
    }

    #[test]
    fn test_zone_shifts_today() {
        // 2024-03-15 20:00 UTC is already 2024-03-16 in UTC+9.
        let now = now_at(20, 0, 0);
        let task = MaintenanceTask::new("T", "2024-03-16");

        let utc = Classifier::default();
        assert_eq!(utc.classify(&task, now).tier, AlertTier::UpcomingSoon);

        let seoul = Classifier::new(AlertConfig::default().with_utc_offset_minutes(540));
        assert_eq!(seoul.classify(&task, now).tier, AlertTier::DueToday);
    }

    #[test]
    fn test_unparseable_is_unknown() {
        let now = now_at(10, 0, 0);
        for raw in ["", "soon", "2024-02-31", "15/03/2024"] {
            let alert = classify(&MaintenanceTask::new("T", raw), now);
            assert_eq!(alert.tier, AlertTier::Unknown, "{raw:?}");
            assert_eq!(alert.days_until_due, None);
        }
    }

    #[test]
    fn test_in_progress_classifies_like_pending() {
        let now = now_at(10, 0, 0);
        let task = due_in(-2).with_status(TaskStatus::InProgress);
        assert_eq!(classify(&task, now).tier, AlertTier::Overdue);
    }

    #[test]
    fn test_custom_thresholds() {
        let c = Classifier::new(AlertConfig::default().with_thresholds(1, 14));
        assert_eq!(c.tier_for_days(1), AlertTier::UpcomingSoon);
        assert_eq!(c.tier_for_days(2), AlertTier::UpcomingWeek);
        assert_eq!(c.tier_for_days(14), AlertTier::UpcomingWeek);
        assert_eq!(c.tier_for_days(15), AlertTier::OnSchedule);
    }
}
