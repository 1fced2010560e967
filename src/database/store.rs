//! Profile store interface
//!
//! The matching, recommendation and visibility services read and write
//! through this trait. [`crate::database::DatabaseService`] is the
//! Postgres-backed production implementation; tests substitute an in-memory
//! store.

use crate::models::{Connection, Event, EventAttendee, EventWithHost, UserProfile};
use crate::utils::errors::Result;

#[allow(async_fn_in_trait)]
pub trait ProfileStore {
    /// Look up a user profile by id
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>>;

    /// Look up an event by id
    async fn get_event(&self, event_id: i64) -> Result<Option<Event>>;

    /// Profiles of everyone currently attending the event
    async fn get_event_attendees(&self, event_id: i64) -> Result<Vec<UserProfile>>;

    /// Events the user attends
    async fn get_user_events(&self, user_id: i64) -> Result<Vec<Event>>;

    /// Every event, with host profile and attendee count attached, in stable
    /// store order
    async fn get_all_events(&self) -> Result<Vec<EventWithHost>>;

    /// Profiles of everyone connected to the user, across all events and
    /// regardless of which side created the connection
    async fn get_user_connections(&self, user_id: i64) -> Result<Vec<UserProfile>>;

    async fn is_user_attending(&self, event_id: i64, user_id: i64) -> Result<bool>;

    /// Record attendance. Idempotent: re-joining returns the existing record.
    /// Joining a nonexistent event is an `EventNotFound` error.
    async fn join_event(&self, event_id: i64, user_id: i64) -> Result<EventAttendee>;

    /// Remove attendance; returns false when the user was not attending
    async fn leave_event(&self, event_id: i64, user_id: i64) -> Result<bool>;

    /// Record a connection. Idempotent and direction-agnostic: an existing
    /// record between the pair for this event is returned unchanged.
    async fn create_connection(
        &self,
        from_user_id: i64,
        to_user_id: i64,
        event_id: i64,
    ) -> Result<Connection>;
}
