//! Connection repository implementation

use sqlx::PgPool;
use crate::models::connection::{Connection, CreateConnectionRequest};
use crate::models::user::UserProfile;
use crate::utils::errors::RealConnectError;

#[derive(Debug, Clone)]
pub struct ConnectionRepository {
    pool: PgPool,
}

const PROFILE_COLUMNS: &str = "u.id, u.username, u.email, u.full_name, u.age, u.hometown, u.state, u.college, u.high_school, u.school, u.background, u.aspirations, u.interests, u.social_links, u.profile_photo, u.created_at";

impl ConnectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a connection. The unordered-pair unique index keeps at most one
    /// row per pair and event; an existing record in either direction is
    /// returned unchanged.
    pub async fn create(&self, request: CreateConnectionRequest) -> Result<Connection, RealConnectError> {
        if let Some(existing) = self
            .find_between(request.event_id, request.from_user_id, request.to_user_id)
            .await?
        {
            return Ok(existing);
        }

        let inserted = sqlx::query_as::<_, Connection>(
            r#"
            INSERT INTO connections (from_user_id, to_user_id, event_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (event_id, (LEAST(from_user_id, to_user_id)), (GREATEST(from_user_id, to_user_id))) DO NOTHING
            RETURNING id, from_user_id, to_user_id, event_id, created_at
            "#
        )
        .bind(request.from_user_id)
        .bind(request.to_user_id)
        .bind(request.event_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(connection) = inserted {
            return Ok(connection);
        }

        // A concurrent create for the same pair won the insert; its row is
        // the connection.
        let connection = sqlx::query_as::<_, Connection>(
            r#"
            SELECT id, from_user_id, to_user_id, event_id, created_at
            FROM connections
            WHERE event_id = $1
              AND ((from_user_id = $2 AND to_user_id = $3) OR (from_user_id = $3 AND to_user_id = $2))
            "#
        )
        .bind(request.event_id)
        .bind(request.from_user_id)
        .bind(request.to_user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(connection)
    }

    /// Existing connection between two users for an event, either direction
    pub async fn find_between(&self, event_id: i64, user_a: i64, user_b: i64) -> Result<Option<Connection>, RealConnectError> {
        let connection = sqlx::query_as::<_, Connection>(
            r#"
            SELECT id, from_user_id, to_user_id, event_id, created_at
            FROM connections
            WHERE event_id = $1
              AND ((from_user_id = $2 AND to_user_id = $3) OR (from_user_id = $3 AND to_user_id = $2))
            "#
        )
        .bind(event_id)
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(connection)
    }

    /// Profiles of everyone connected to the user, whichever side created the
    /// connection
    pub async fn list_user_connections(&self, user_id: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        let profiles = sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM connections c
            INNER JOIN users u ON u.id = CASE
                WHEN c.from_user_id = $1 THEN c.to_user_id
                ELSE c.from_user_id
            END
            WHERE c.from_user_id = $1 OR c.to_user_id = $1
            ORDER BY c.created_at ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Connections of the user restricted to one event
    pub async fn list_event_connections(&self, event_id: i64, user_id: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        let profiles = sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM connections c
            INNER JOIN users u ON u.id = CASE
                WHEN c.from_user_id = $2 THEN c.to_user_id
                ELSE c.from_user_id
            END
            WHERE c.event_id = $1 AND (c.from_user_id = $2 OR c.to_user_id = $2)
            ORDER BY c.created_at ASC
            "#
        ))
        .bind(event_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Count total connections
    pub async fn count(&self) -> Result<i64, RealConnectError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM connections")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
