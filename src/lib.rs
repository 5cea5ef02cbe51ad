//! Policy and temporal-alert engine for maintenance record keeping.
//!
//! Decides what a caller may do and how urgent each maintenance task is.
//! The record stores, transport, and rendering live elsewhere; this crate
//! takes their data as plain values and returns plain values.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Role`, `Action`, `MaintenanceTask`,
//!   `TaskStatus`, `AlertTier`, `Alert`
//! - **`policy`**: Static role → action permission table
//! - **`alerts`**: Due-date classification, calendar day buckets, month
//!   grids, dashboard counts
//! - **`config`**: Tier thresholds and calendar zone
//! - **`validation`**: Task record integrity checks (duplicate IDs,
//!   equipment references, unreadable dates)
//!
//! # Determinism
//!
//! No function reads the wall clock or session state. Role and reference
//! instant are always arguments, so every decision reproduces in a test
//! from literal inputs.

pub mod alerts;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod validation;

pub use alerts::{build_month_grid, classify, day_bucket, Classifier};
pub use config::AlertConfig;
pub use policy::{has_permission, has_role};
