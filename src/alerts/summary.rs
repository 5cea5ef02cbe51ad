//! Dashboard summary counts.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | total | Number of tasks |
//! | pending / in_progress / completed | Count per status |
//! | overdue | Open tasks whose tier is `Overdue` |
//! | due_today | Open tasks whose tier is `DueToday` |
//! | by_tier | Count per alert tier |

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use super::Classifier;
use crate::models::{AlertTier, MaintenanceTask, TaskStatus};

/// Task counts for the dashboard cards and status chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub by_tier: HashMap<AlertTier, usize>,
}

impl DashboardSummary {
    /// Computes the summary with the default configuration.
    pub fn calculate(tasks: &[MaintenanceTask], now: DateTime<Utc>) -> Self {
        Classifier::default().summarize(tasks, now)
    }

    /// Count for one tier (zero if absent).
    pub fn tier_count(&self, tier: AlertTier) -> usize {
        self.by_tier.get(&tier).copied().unwrap_or(0)
    }

    /// Open tasks: pending plus in progress.
    pub fn open(&self) -> usize {
        self.pending + self.in_progress
    }
}

impl Classifier {
    /// Counts tasks by status and by alert tier.
    pub fn summarize(&self, tasks: &[MaintenanceTask], now: DateTime<Utc>) -> DashboardSummary {
        let today = self.today(now);
        let mut summary = DashboardSummary {
            total: tasks.len(),
            ..Default::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Pending => summary.pending += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Completed => summary.completed += 1,
            }

            let tier = self.classify_on(task, today).tier;
            match tier {
                AlertTier::Overdue => summary.overdue += 1,
                AlertTier::DueToday => summary.due_today += 1,
                _ => {}
            }
            *summary.by_tier.entry(tier).or_insert(0) += 1;
        }

        summary
    }
}
