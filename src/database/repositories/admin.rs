//! Admin privilege repository implementation

use sqlx::PgPool;
use crate::models::admin::{AdminLevel, AdminPrivilege};
use crate::utils::errors::RealConnectError;

#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find privilege record for a user
    pub async fn find_by_user(&self, user_id: i64) -> Result<Option<AdminPrivilege>, RealConnectError> {
        let privilege = sqlx::query_as::<_, AdminPrivilege>(
            "SELECT id, user_id, admin_level, is_system_admin, granted_by, granted_at FROM admin_privileges WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(privilege)
    }

    /// Grant admin privileges to a user
    pub async fn grant(&self, user_id: i64, level: AdminLevel, granted_by: i64) -> Result<AdminPrivilege, RealConnectError> {
        if self.find_by_user(user_id).await?.is_some() {
            return Err(RealConnectError::InvalidInput(
                "User already has admin privileges".to_string()
            ));
        }

        let privilege = sqlx::query_as::<_, AdminPrivilege>(
            r#"
            INSERT INTO admin_privileges (user_id, admin_level, is_system_admin, granted_by)
            VALUES ($1, $2, FALSE, $3)
            RETURNING id, user_id, admin_level, is_system_admin, granted_by, granted_at
            "#
        )
        .bind(user_id)
        .bind(level.as_str())
        .bind(granted_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(privilege)
    }

    /// Revoke admin privileges; system admins are not revocable
    pub async fn revoke(&self, user_id: i64) -> Result<bool, RealConnectError> {
        let result = sqlx::query(
            "DELETE FROM admin_privileges WHERE user_id = $1 AND is_system_admin = FALSE"
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Change a non-system admin's level
    pub async fn update_level(&self, user_id: i64, level: AdminLevel) -> Result<AdminPrivilege, RealConnectError> {
        let privilege = sqlx::query_as::<_, AdminPrivilege>(
            r#"
            UPDATE admin_privileges
            SET admin_level = $2
            WHERE user_id = $1 AND is_system_admin = FALSE
            RETURNING id, user_id, admin_level, is_system_admin, granted_by, granted_at
            "#
        )
        .bind(user_id)
        .bind(level.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RealConnectError::InvalidInput(
            "Admin not found or cannot update system admin".to_string()
        ))?;

        Ok(privilege)
    }

    /// List all privilege records
    pub async fn list(&self) -> Result<Vec<AdminPrivilege>, RealConnectError> {
        let privileges = sqlx::query_as::<_, AdminPrivilege>(
            "SELECT id, user_id, admin_level, is_system_admin, granted_by, granted_at FROM admin_privileges ORDER BY granted_at ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(privileges)
    }
}
