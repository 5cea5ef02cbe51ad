//! Role-based permission policy.
//!
//! A static, total table from role to allowed actions:
//!
//! | Role | view | add | edit | delete | register | manage_users |
//! |------|------|-----|------|--------|----------|--------------|
//! | admin | ✓ | ✓ | ✓ | ✓ | ✓ | ✓ |
//! | operator | ✓ | ✓ | ✓ | | | |
//! | user | ✓ | | | | | |
//!
//! Any role string outside the table holds the empty set. Nothing here
//! reads session state; the caller passes its role in.

use tracing::debug;

use crate::error::PolicyDenied;
use crate::models::{Action, Role};

const ADMIN_ACTIONS: &[Action] = &[
    Action::View,
    Action::Add,
    Action::Edit,
    Action::Delete,
    Action::Register,
    Action::ManageUsers,
];
const OPERATOR_ACTIONS: &[Action] = &[Action::View, Action::Add, Action::Edit];
const USER_ACTIONS: &[Action] = &[Action::View];

/// Actions granted to `role`.
pub fn allowed_actions(role: Role) -> &'static [Action] {
    match role {
        Role::Admin => ADMIN_ACTIONS,
        Role::Operator => OPERATOR_ACTIONS,
        Role::User => USER_ACTIONS,
    }
}

/// Whether `role` may perform `action`.
pub fn has_permission(role: Role, action: Action) -> bool {
    let allowed = allowed_actions(role).contains(&action);
    if !allowed {
        debug!(%role, %action, "permission denied");
    }
    allowed
}

/// [`has_permission`] for untrusted strings.
///
/// An unrecognized role or action is denied, never an error.
pub fn has_permission_str(role: &str, action: &str) -> bool {
    match (role.parse::<Role>(), action.parse::<Action>()) {
        (Ok(role), Ok(action)) => has_permission(role, action),
        _ => {
            debug!(role, action, "permission denied: unrecognized role or action");
            false
        }
    }
}

/// Whether the caller holds exactly `expected`.
///
/// `None` (no authenticated caller) matches nothing.
pub fn has_role(current: Option<Role>, expected: Role) -> bool {
    current == Some(expected)
}

/// `Result` form of [`has_permission`], for gating a mutation with `?`.
pub fn authorize(role: Role, action: Action) -> Result<(), PolicyDenied> {
    if has_permission(role, action) {
        Ok(())
    } else {
        Err(PolicyDenied { role, action })
    }
}
