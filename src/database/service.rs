//! Database service layer
//!
//! This module provides a high-level interface to database operations and the
//! Postgres-backed [`ProfileStore`] implementation consumed by the core
//! services.

use crate::database::store::ProfileStore;
use crate::database::{AdminRepository, ConnectionRepository, DatabasePool, EventRepository, UserRepository};
use crate::models::*;
use crate::utils::errors::RealConnectError;
use crate::utils::logging::{log_connection, log_event_action};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub connections: ConnectionRepository,
    pub admin: AdminRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            connections: ConnectionRepository::new(pool.clone()),
            admin: AdminRepository::new(pool),
        }
    }

    /// Register a new user; username and email must be unused
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserProfile, RealConnectError> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(RealConnectError::InvalidInput(
                "A user with this email already exists".to_string()
            ));
        }
        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(RealConnectError::InvalidInput(
                "A user with this username already exists".to_string()
            ));
        }

        self.users.create(request).await
    }

    /// Apply a partial profile update for the owning user
    pub async fn update_profile(&self, user_id: i64, request: UpdateProfileRequest) -> Result<UserProfile, RealConnectError> {
        self.users.update(user_id, request).await
    }

    /// Create a new event owned by the host
    pub async fn create_event(&self, host_id: i64, request: CreateEventRequest) -> Result<Event, RealConnectError> {
        let event = self.events.create(host_id, request).await?;
        log_event_action(event.id, "created", host_id);
        Ok(event)
    }

    /// Find an event by its join code
    pub async fn find_event_by_join_code(&self, join_code: &str) -> Result<Option<Event>, RealConnectError> {
        self.events.find_by_join_code(join_code).await
    }
}

impl ProfileStore for DatabaseService {
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>, RealConnectError> {
        self.users.find_by_id(user_id).await
    }

    async fn get_event(&self, event_id: i64) -> Result<Option<Event>, RealConnectError> {
        self.events.find_by_id(event_id).await
    }

    async fn get_event_attendees(&self, event_id: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        self.events.get_attendees(event_id).await
    }

    async fn get_user_events(&self, user_id: i64) -> Result<Vec<Event>, RealConnectError> {
        self.events.get_user_events(user_id).await
    }

    async fn get_all_events(&self) -> Result<Vec<EventWithHost>, RealConnectError> {
        self.events.list_with_hosts().await
    }

    async fn get_user_connections(&self, user_id: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        self.connections.list_user_connections(user_id).await
    }

    async fn is_user_attending(&self, event_id: i64, user_id: i64) -> Result<bool, RealConnectError> {
        self.events.is_attending(event_id, user_id).await
    }

    async fn join_event(&self, event_id: i64, user_id: i64) -> Result<EventAttendee, RealConnectError> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(RealConnectError::EventNotFound { event_id });
        }

        let attendee = self.events.join(event_id, user_id).await?;
        log_event_action(event_id, "joined", user_id);
        Ok(attendee)
    }

    async fn leave_event(&self, event_id: i64, user_id: i64) -> Result<bool, RealConnectError> {
        let left = self.events.leave(event_id, user_id).await?;
        if left {
            log_event_action(event_id, "left", user_id);
        }
        Ok(left)
    }

    async fn create_connection(&self, from_user_id: i64, to_user_id: i64, event_id: i64) -> Result<Connection, RealConnectError> {
        let connection = self
            .connections
            .create(CreateConnectionRequest { from_user_id, to_user_id, event_id })
            .await?;
        log_connection(from_user_id, to_user_id, event_id);
        Ok(connection)
    }
}
