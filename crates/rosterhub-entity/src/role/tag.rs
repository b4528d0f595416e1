//! Role tag enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role classes recognized by the system.
///
/// A single tag per account; there is no policy engine layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    /// Full administrative access.
    Superadmin,
    /// Regular authenticated user.
    User,
    /// Limited guest access.
    Guest,
}

impl RoleTag {
    /// Return the tag as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleTag {
    type Err = rosterhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "superadmin" => Ok(Self::Superadmin),
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            _ => Err(rosterhub_core::AppError::validation(format!(
                "Invalid role tag: '{s}'. Expected one of: superadmin, user, guest"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("superadmin".parse::<RoleTag>().unwrap(), RoleTag::Superadmin);
        assert_eq!("USER".parse::<RoleTag>().unwrap(), RoleTag::User);
        assert!("owner".parse::<RoleTag>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for tag in [RoleTag::Superadmin, RoleTag::User, RoleTag::Guest] {
            assert_eq!(tag.to_string().parse::<RoleTag>().unwrap(), tag);
        }
    }
}
