//! Calendar aggregation: per-day buckets and month grids.
//!
//! A day bucket summarizes every open (non-completed) task due on one
//! calendar day. Severity is the worst of their tiers: red for any
//! overdue task, else orange for any due-today or upcoming task, else
//! none. Days with no open tasks have no bucket at all.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;

use super::Classifier;
use crate::config::WeekStart;
use crate::models::{AlertTier, MaintenanceTask};

/// Marker severity of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Orange,
    Red,
}

impl Severity {
    /// Severity contributed by a single tier.
    pub fn from_tier(tier: AlertTier) -> Self {
        if tier == AlertTier::Overdue {
            Self::Red
        } else if tier.is_upcoming() {
            Self::Orange
        } else {
            Self::None
        }
    }
}

/// Aggregated alert state of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub severity: Severity,
    /// Number of open tasks due that day.
    pub count: usize,
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayCell {
    /// Padding before the first of the month.
    Blank,
    /// Day of month, 1-based.
    Day(u32),
}

impl DayCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Blank => None,
            Self::Day(d) => Some(*d),
        }
    }
}

/// A month grid cell paired with its bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub cell: DayCell,
    pub bucket: Option<DayBucket>,
}

impl Classifier {
    /// Bucket for `day`, or `None` if no open task is due that day.
    pub fn day_bucket(
        &self,
        day: NaiveDate,
        tasks: &[MaintenanceTask],
        now: DateTime<Utc>,
    ) -> Option<DayBucket> {
        let today = self.today(now);
        let tiers = tasks
            .iter()
            .filter(|t| !t.is_completed() && self.due_day(t) == Some(day))
            .map(|t| self.classify_on(t, today).tier);
        fold_bucket(day, tiers)
    }

    /// Month grid for the month containing `reference`, with this
    /// classifier's week start.
    pub fn month_grid<D: Datelike>(&self, reference: &D) -> Vec<DayCell> {
        build_month_grid_with(reference, self.config().week_start)
    }

    /// Grid for the month containing `reference`, each day paired with
    /// its bucket.
    ///
    /// Each task is classified once, however many days the grid has.
    pub fn month_view<D: Datelike>(
        &self,
        reference: &D,
        tasks: &[MaintenanceTask],
        now: DateTime<Utc>,
    ) -> Vec<MonthCell> {
        let today = self.today(now);
        let mut by_day: HashMap<NaiveDate, Vec<AlertTier>> = HashMap::new();
        for task in tasks.iter().filter(|t| !t.is_completed()) {
            if let Some(due) = self.due_day(task) {
                if due.year() == reference.year() && due.month() == reference.month() {
                    by_day
                        .entry(due)
                        .or_default()
                        .push(self.classify_on(task, today).tier);
                }
            }
        }

        self.month_grid(reference)
            .into_iter()
            .map(|cell| {
                let bucket = cell
                    .day()
                    .and_then(|d| NaiveDate::from_ymd_opt(reference.year(), reference.month(), d))
                    .and_then(|date| {
                        let tiers = by_day.remove(&date)?;
                        fold_bucket(date, tiers)
                    });
                MonthCell { cell, bucket }
            })
            .collect()
    }
}

/// [`Classifier::day_bucket`] with the default configuration.
pub fn day_bucket(
    day: NaiveDate,
    tasks: &[MaintenanceTask],
    now: DateTime<Utc>,
) -> Option<DayBucket> {
    Classifier::default().day_bucket(day, tasks, now)
}

/// Sunday-first month grid for the month containing `reference`.
///
/// Leading blanks up to the weekday of the 1st, then days `1..=n`.
pub fn build_month_grid<D: Datelike>(reference: &D) -> Vec<DayCell> {
    build_month_grid_with(reference, WeekStart::Sunday)
}

/// Month grid with an explicit first weekday.
pub fn build_month_grid_with<D: Datelike>(reference: &D, week_start: WeekStart) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1) else {
        return Vec::new();
    };
    let blanks = week_start.leading_blanks(first.weekday());
    let days = days_in_month(first);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| DayCell::Blank));
    cells.extend((1..=days).map(DayCell::Day));
    cells
}

/// Number of days in the month starting at `first`.
fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

fn fold_bucket(day: NaiveDate, tiers: impl IntoIterator<Item = AlertTier>) -> Option<DayBucket> {
    let mut count = 0;
    let mut severity = Severity::None;
    for tier in tiers {
        count += 1;
        severity = severity.max(Severity::from_tier(tier));
    }
    trace!(%day, count, ?severity, "day bucket");
    (count > 0).then_some(DayBucket {
        day,
        severity,
        count,
    })
}
