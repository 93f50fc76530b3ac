//! Account roles
//!
//! The closed set of account types a user can hold. Routes list the exact
//! roles they accept; there is no ordering between roles, so `Admin` does
//! not imply `ReadWrite` unless a route names both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Account type carried by a user record and embedded in bearer tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Read-only access (default for accounts created through Google login)
    #[default]
    #[serde(rename = "read")]
    Read,
    /// May create and update catalogue entries
    #[serde(rename = "read-write")]
    ReadWrite,
    /// Full access, including deletes and user administration
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Wire name of the role, as stored and as sent in `accountType`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::ReadWrite => "read-write",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "read" => Ok(Self::Read),
            "read-write" => Ok(Self::ReadWrite),
            "admin" => Ok(Self::Admin),
            other => Err(SharedError::validation(
                "accountType",
                format!("Unknown account type '{other}' (expected read, read-write or admin)"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_wire_name() {
        for role in [Role::Read, Role::ReadWrite, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serializes_as_account_type_string() {
        let json = serde_json::to_string(&Role::ReadWrite).unwrap();
        assert_eq!(json, "\"read-write\"");
    }

    #[test]
    fn test_unknown_role_is_validation_error() {
        let err = "superuser".parse::<Role>().unwrap_err();
        match err {
            SharedError::ValidationError { field, .. } => assert_eq!(field, "accountType"),
        }
    }
}
