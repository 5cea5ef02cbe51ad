//! Alert engine configuration.
//!
//! One place for the tier thresholds and the calendar zone, so every
//! screen classifies with the same rules. Defaults match the dashboard:
//! soon = 1..=3 days, this week = 4..=7 days, UTC calendar, weeks start
//! on Sunday.
//!
//! # TOML
//!
//! ```toml
//! soon_days = 3
//! week_days = 7
//! utc_offset_minutes = 540   # Asia/Seoul
//! week_start = "monday"
//! ```
//!
//! Every key is optional. The caller reads the file; this module only
//! parses text.

use chrono::{FixedOffset, Offset, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

const MAX_OFFSET_MINUTES: u32 = 24 * 60 - 1;

/// First column of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Number of blank cells before a month whose first day is `weekday`.
    pub fn leading_blanks(&self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// Tier thresholds and calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Last day (inclusive) of the `UpcomingSoon` range.
    pub soon_days: i64,
    /// Last day (inclusive) of the `UpcomingWeek` range.
    pub week_days: i64,
    /// Calendar zone, in minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// First day of the week in month grids.
    pub week_start: WeekStart,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            soon_days: 3,
            week_days: 7,
            utc_offset_minutes: 0,
            week_start: WeekStart::Sunday,
        }
    }
}

impl AlertConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        info!(
            soon_days = config.soon_days,
            week_days = config.week_days,
            utc_offset_minutes = config.utc_offset_minutes,
            "alert config loaded"
        );
        Ok(config)
    }

    /// Sets the calendar zone.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Sets both tier thresholds.
    pub fn with_thresholds(mut self, soon_days: i64, week_days: i64) -> Self {
        self.soon_days = soon_days;
        self.week_days = week_days;
        self
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Checks threshold ordering and offset range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.soon_days < 1 {
            return Err(ConfigError::Invalid {
                field: "soon_days",
                reason: format!("must be at least 1, got {}", self.soon_days),
            });
        }
        if self.week_days < self.soon_days {
            return Err(ConfigError::Invalid {
                field: "week_days",
                reason: format!(
                    "must be >= soon_days ({}), got {}",
                    self.soon_days, self.week_days
                ),
            });
        }
        if self.utc_offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid {
                field: "utc_offset_minutes",
                reason: format!("out of range: {}", self.utc_offset_minutes),
            });
        }
        Ok(())
    }

    /// The calendar zone. Falls back to UTC for an out-of-range offset.
    pub fn zone(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}
