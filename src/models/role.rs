//! Identity roles and gated actions.
//!
//! Both sets are closed. A role string that does not name one of the
//! three roles never becomes a `Role`; the policy layer treats it as
//! holding no actions at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseActionError, ParseRoleError};

/// Identity class of the caller.
///
/// There is no hierarchy between roles beyond what the permission table
/// grants each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user management.
    Admin,
    /// Day-to-day record keeping: view, add, edit.
    Operator,
    /// Read-only access.
    User,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Operator, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Operator => "operator",
            Self::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        *self == Self::Admin
    }

    pub fn is_operator(&self) -> bool {
        *self == Self::Operator
    }

    pub fn is_user(&self) -> bool {
        *self == Self::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "operator" => Ok(Self::Operator),
            "user" => Ok(Self::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// A named capability gated by the permission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
    Register,
    ManageUsers,
}

impl Action {
    /// All actions, in declaration order.
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Register,
        Action::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Register => "register",
            Self::ManageUsers => "manage_users",
        }
    }

    /// Whether performing this action changes stored records.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::View)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_flags() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Admin.is_operator());
        assert!(Role::Operator.is_operator());
        assert!(Role::User.is_user());
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("manage_users".parse::<Action>(), Ok(Action::ManageUsers));
        assert_eq!("view".parse::<Action>(), Ok(Action::View));
        let err = "launch".parse::<Action>().unwrap_err();
        assert_eq!(err.0, "launch");
    }

    #[test]
    fn test_only_view_is_read_only() {
        let mutating: Vec<_> = Action::ALL.iter().filter(|a| a.is_mutating()).collect();
        assert_eq!(mutating.len(), 5);
        assert!(!Action::View.is_mutating());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Action::ManageUsers).unwrap();
        assert_eq!(json, "\"manage_users\"");
        let role: Role = serde_json::from_str("\"operator\"").unwrap();
        assert_eq!(role, Role::Operator);
    }
}
