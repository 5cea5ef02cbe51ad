//! Maintenance domain models.
//!
//! Provides the value types the policy and alert layers operate on.
//! Every value is built fresh from caller-supplied state; nothing here
//! has a stored lifecycle.
//!
//! # Types
//!
//! | Type | Meaning |
//! |------|---------|
//! | Role | Caller identity class (admin, operator, user) |
//! | Action | Gated capability (view, add, edit, delete, ...) |
//! | MaintenanceTask | Work item with a due date and status |
//! | AlertTier | Urgency of a task relative to today |
//! | Alert | Rendering-ready banner for one task |

mod alert;
mod role;
mod task;

pub use alert::{Alert, AlertTier, ColorToken};
pub use role::{Action, Role};
pub use task::{parse_calendar_date, MaintenanceTask, TaskStatus};
