//! Admin privilege model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminPrivilege {
    pub id: i64,
    pub user_id: i64,
    pub admin_level: String,
    pub is_system_admin: bool,
    pub granted_by: Option<i64>,
    pub granted_at: DateTime<Utc>,
}

impl AdminPrivilege {
    /// Parsed admin level; unrecognized stored values fall back to standard.
    pub fn level(&self) -> AdminLevel {
        AdminLevel::parse(&self.admin_level).unwrap_or(AdminLevel::Standard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminLevel {
    Super,
    Standard,
    ReadOnly,
}

impl AdminLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminLevel::Super => "super",
            AdminLevel::Standard => "standard",
            AdminLevel::ReadOnly => "readonly",
        }
    }

    pub fn parse(value: &str) -> Option<AdminLevel> {
        match value {
            "super" => Some(AdminLevel::Super),
            "standard" => Some(AdminLevel::Standard),
            "readonly" => Some(AdminLevel::ReadOnly),
            _ => None,
        }
    }
}

/// Resolved authorization role for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// System-level super admin, not revocable through the privileges table
    System,
    Admin(AdminLevel),
    Member,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        !matches!(self, Role::Member)
    }
}
