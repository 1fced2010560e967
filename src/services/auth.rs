//! Authorization resolution
//!
//! Role lookup lives apart from the matching core. The legacy hardcoded
//! super admin predates the privileges table and survives here as a single
//! explicit fallback case.

use tracing::debug;

use crate::database::repositories::{AdminRepository, UserRepository};
use crate::models::admin::{AdminLevel, AdminPrivilege, Role};
use crate::models::user::UserProfile;
use crate::utils::errors::{RealConnectError, Result};
use crate::utils::logging::log_admin_action;

const LEGACY_ADMIN_EMAIL: &str = "admin@realconnect.ing";
const LEGACY_ADMIN_USER_ID: i64 = 1;

#[derive(Debug, Clone)]
pub struct AuthorizationService {
    users: UserRepository,
    admin: AdminRepository,
}

impl AuthorizationService {
    pub fn new(users: UserRepository, admin: AdminRepository) -> Self {
        Self { users, admin }
    }

    /// Resolve the authorization role for a user
    pub async fn resolve_authorization(&self, user_id: i64) -> Result<Role> {
        let profile = self.users.find_by_id(user_id).await?;
        let privilege = self.admin.find_by_user(user_id).await?;
        let role = resolve_role(user_id, profile.as_ref(), privilege.as_ref());
        debug!(user_id = user_id, role = ?role, "Authorization resolved");
        Ok(role)
    }

    /// Grant admin privileges to the user registered under `email`
    pub async fn grant_admin(&self, email: &str, level: AdminLevel, granted_by: i64) -> Result<AdminPrivilege> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(RealConnectError::InvalidInput(format!("No user registered under {email}")))?;

        let privilege = self.admin.grant(user.id, level, granted_by).await?;
        log_admin_action(granted_by, "grant_admin", Some(email));
        Ok(privilege)
    }

    /// Revoke admin privileges; system admins are not revocable
    pub async fn revoke_admin(&self, user_id: i64, revoked_by: i64) -> Result<bool> {
        let revoked = self.admin.revoke(user_id).await?;
        if revoked {
            log_admin_action(revoked_by, "revoke_admin", None);
        }
        Ok(revoked)
    }
}

/// Pure role decision: the legacy fallback wins, then the privileges table.
fn resolve_role(user_id: i64, profile: Option<&UserProfile>, privilege: Option<&AdminPrivilege>) -> Role {
    let legacy_admin = user_id == LEGACY_ADMIN_USER_ID
        || profile.is_some_and(|p| p.email == LEGACY_ADMIN_EMAIL);
    if legacy_admin {
        return Role::System;
    }

    match privilege {
        Some(privilege) if privilege.is_system_admin => Role::System,
        Some(privilege) => Role::Admin(privilege.level()),
        None => Role::Member,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::admin::AdminLevel;

    fn profile(id: i64, email: &str) -> UserProfile {
        UserProfile {
            id,
            username: format!("user{id}"),
            email: email.to_string(),
            full_name: format!("User {id}"),
            age: 30,
            hometown: None,
            state: None,
            college: None,
            high_school: None,
            school: None,
            background: None,
            aspirations: None,
            interests: None,
            social_links: None,
            profile_photo: None,
            created_at: Utc::now(),
        }
    }

    fn privilege(user_id: i64, level: &str, system: bool) -> AdminPrivilege {
        AdminPrivilege {
            id: 1,
            user_id,
            admin_level: level.to_string(),
            is_system_admin: system,
            granted_by: None,
            granted_at: Utc::now(),
        }
    }

    #[test]
    fn test_legacy_admin_by_user_id() {
        let p = profile(1, "someone@example.com");
        assert_eq!(resolve_role(1, Some(&p), None), Role::System);
    }

    #[test]
    fn test_legacy_admin_by_email() {
        let p = profile(42, LEGACY_ADMIN_EMAIL);
        assert_eq!(resolve_role(42, Some(&p), None), Role::System);
    }

    #[test]
    fn test_privilege_table_levels() {
        let p = profile(5, "user5@example.com");
        assert_eq!(
            resolve_role(5, Some(&p), Some(&privilege(5, "readonly", false))),
            Role::Admin(AdminLevel::ReadOnly)
        );
        assert_eq!(
            resolve_role(5, Some(&p), Some(&privilege(5, "standard", true))),
            Role::System
        );
    }

    #[test]
    fn test_unknown_level_falls_back_to_standard() {
        let p = profile(5, "user5@example.com");
        assert_eq!(
            resolve_role(5, Some(&p), Some(&privilege(5, "owner", false))),
            Role::Admin(AdminLevel::Standard)
        );
    }

    #[test]
    fn test_everyone_else_is_member() {
        let p = profile(9, "user9@example.com");
        assert_eq!(resolve_role(9, Some(&p), None), Role::Member);
        assert_eq!(resolve_role(9, None, None), Role::Member);
    }
}
