//! Connection management service

use tracing::{debug, info};

use crate::database::store::ProfileStore;
use crate::models::connection::Connection;
use crate::models::user::UserProfile;
use crate::utils::errors::{RealConnectError, Result};

#[derive(Debug, Clone)]
pub struct ConnectionService<S> {
    store: S,
}

impl<S: ProfileStore> ConnectionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a connection between two users at an event.
    ///
    /// Idempotent and direction-agnostic: if a record already exists for the
    /// pair and event, whichever side created it, that record is returned
    /// unchanged.
    pub async fn create_connection(&self, from_user_id: i64, to_user_id: i64, event_id: i64) -> Result<Connection> {
        if from_user_id == to_user_id {
            return Err(RealConnectError::InvalidInput(
                "Cannot connect a user to themselves".to_string()
            ));
        }

        let connection = self
            .store
            .create_connection(from_user_id, to_user_id, event_id)
            .await?;
        info!(
            connection_id = connection.id,
            from_user_id = from_user_id,
            to_user_id = to_user_id,
            event_id = event_id,
            "Connection created or returned"
        );
        Ok(connection)
    }

    /// Profiles of everyone connected to the user, across all events
    pub async fn list_connections(&self, user_id: i64) -> Result<Vec<UserProfile>> {
        debug!(user_id = user_id, "Listing connections");
        self.store.get_user_connections(user_id).await
    }
}
