//! Connection model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Acquaintance record between two users scoped to an event. Stored with a
/// direction but treated as undirected everywhere: at most one row exists per
/// unordered pair and event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Connection {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConnectionRequest {
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub event_id: i64,
}
