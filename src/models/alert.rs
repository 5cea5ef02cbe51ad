//! Alert tiers and rendering-ready alerts.
//!
//! # Urgency Order
//!
//! | Tier | Urgency | Color |
//! |------|---------|-------|
//! | Completed | 0 | blue |
//! | OnSchedule | 0 | green |
//! | UpcomingWeek | 1 | orange-light |
//! | UpcomingSoon | 2 | orange-strong |
//! | DueToday | 3 | orange-strong |
//! | Overdue | 4 | red |
//! | Unknown | - | neutral |
//!
//! `Unknown` has no urgency and compares with nothing, so it is never
//! escalated by a max-of-tiers reduction.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Urgency classification of a task relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertTier {
    Completed,
    OnSchedule,
    UpcomingWeek,
    UpcomingSoon,
    DueToday,
    Overdue,
    /// Due date could not be read.
    Unknown,
}

impl AlertTier {
    /// All tiers, least to most urgent, `Unknown` last.
    pub const ALL: [AlertTier; 7] = [
        AlertTier::Completed,
        AlertTier::OnSchedule,
        AlertTier::UpcomingWeek,
        AlertTier::UpcomingSoon,
        AlertTier::DueToday,
        AlertTier::Overdue,
        AlertTier::Unknown,
    ];

    /// Urgency rank, or `None` for `Unknown`.
    pub fn urgency(&self) -> Option<u8> {
        match self {
            Self::Completed | Self::OnSchedule => Some(0),
            Self::UpcomingWeek => Some(1),
            Self::UpcomingSoon => Some(2),
            Self::DueToday => Some(3),
            Self::Overdue => Some(4),
            Self::Unknown => None,
        }
    }

    /// Compares urgency. `None` if either side is `Unknown`.
    ///
    /// `Completed` and `OnSchedule` compare `Equal` even though they are
    /// different tiers, which is why this is not a `PartialOrd` impl.
    pub fn cmp_urgency(&self, other: &Self) -> Option<Ordering> {
        Some(self.urgency()?.cmp(&other.urgency()?))
    }

    /// Whether this tier is strictly more urgent than `other`.
    pub fn is_more_urgent_than(&self, other: &Self) -> bool {
        self.cmp_urgency(other) == Some(Ordering::Greater)
    }

    /// Tiers that mark a calendar day orange.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::DueToday | Self::UpcomingSoon | Self::UpcomingWeek)
    }

    /// Fixed icon for this tier.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::OnSchedule => "✅",
            Self::UpcomingWeek => "📅",
            Self::UpcomingSoon | Self::DueToday => "🟠",
            Self::Overdue => "⚠️",
            Self::Unknown => "❔",
        }
    }

    /// Fixed color for this tier.
    pub fn color(&self) -> ColorToken {
        match self {
            Self::Completed => ColorToken::Blue,
            Self::OnSchedule => ColorToken::Green,
            Self::UpcomingWeek => ColorToken::OrangeLight,
            Self::UpcomingSoon | Self::DueToday => ColorToken::OrangeStrong,
            Self::Overdue => ColorToken::Red,
            Self::Unknown => ColorToken::Neutral,
        }
    }
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Completed => "Completed",
            Self::OnSchedule => "On schedule",
            Self::UpcomingWeek => "Upcoming this week",
            Self::UpcomingSoon => "Upcoming soon",
            Self::DueToday => "Due today",
            Self::Overdue => "Overdue",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Color token carried by an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Red,
    OrangeStrong,
    OrangeLight,
    Green,
    Blue,
    Neutral,
}

impl ColorToken {
    /// Accent color (border, text).
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::OrangeStrong => "#f59e0b",
            Self::OrangeLight => "#fbbf24",
            Self::Green => "#10b981",
            Self::Blue => "#3b82f6",
            Self::Neutral => "#9ca3af",
        }
    }

    /// Translucent card background.
    pub fn background(&self) -> &'static str {
        match self {
            Self::Red => "rgba(239, 68, 68, 0.15)",
            Self::OrangeStrong => "rgba(245, 158, 11, 0.15)",
            Self::OrangeLight => "rgba(251, 191, 36, 0.1)",
            Self::Green => "rgba(16, 185, 129, 0.1)",
            Self::Blue => "rgba(59, 130, 246, 0.15)",
            Self::Neutral => "rgba(156, 163, 175, 0.1)",
        }
    }
}

/// A rendering-ready alert for one task.
///
/// Derived solely from the task and the reference instant; never stored,
/// so it serializes for rendering but does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub tier: AlertTier,
    pub icon: &'static str,
    pub message: String,
    pub color: ColorToken,
    /// Signed day delta (due minus today). `None` for completed or
    /// unparseable tasks, where no delta was computed.
    pub days_until_due: Option<i64>,
}

impl Alert {
    /// Builds an alert with the tier's fixed icon and color.
    pub(crate) fn new(tier: AlertTier, message: String, days_until_due: Option<i64>) -> Self {
        Self {
            tier,
            icon: tier.icon(),
            message,
            color: tier.color(),
            days_until_due,
        }
    }

    /// Days past due, for overdue alerts.
    pub fn overdue_days(&self) -> Option<u64> {
        match (self.tier, self.days_until_due) {
            (AlertTier::Overdue, Some(d)) => Some(d.unsigned_abs()),
            _ => None,
        }
    }

    /// Icon and message as one banner line.
    pub fn banner(&self) -> String {
        format!("{} {}", self.icon, self.message)
    }
}
