//! Error types.
//!
//! The policy and alert operations themselves never fail: denials are
//! `false`, malformed due dates are `AlertTier::Unknown`. These types
//! cover the edges around them (string parsing, configuration, and the
//! `Result` form of a permission check).

use thiserror::Error;

use crate::models::{Action, Role};

/// A string that does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role: {0:?}")]
pub struct ParseRoleError(pub String);

/// A string that does not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized action: {0:?}")]
pub struct ParseActionError(pub String);

/// The caller's role does not grant the requested action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("role {role} may not {action}")]
pub struct PolicyDenied {
    pub role: Role,
    pub action: Action,
}

/// Failure to build an [`AlertConfig`](crate::config::AlertConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
