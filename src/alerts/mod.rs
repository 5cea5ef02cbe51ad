//! Temporal alerts: per-task classification and calendar aggregation.
//!
//! All operations are pure. The caller supplies the reference instant;
//! nothing here reads a clock.
//!
//! # Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use u_maintenance::alerts::{classify, day_bucket, Severity};
//! use u_maintenance::models::{AlertTier, MaintenanceTask};
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 10, 14, 0, 0).unwrap();
//! let task = MaintenanceTask::new("T1", "2024-05-08");
//!
//! let alert = classify(&task, now);
//! assert_eq!(alert.tier, AlertTier::Overdue);
//! assert_eq!(alert.message, "OVERDUE by 2 days! Complete immediately!");
//!
//! let bucket = day_bucket(now.date_naive() - chrono::Duration::days(2), &[task], now);
//! assert_eq!(bucket.map(|b| b.severity), Some(Severity::Red));
//! ```

mod calendar;
mod classifier;
mod summary;

pub use calendar::{
    build_month_grid, build_month_grid_with, day_bucket, DayBucket, DayCell, MonthCell, Severity,
};
pub use classifier::{classify, Classifier};
pub use summary::DashboardSummary;
