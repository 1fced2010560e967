//! Test helpers: in-memory profile store and data builders
//!
//! The in-memory store implements the same `ProfileStore` contract as the
//! Postgres-backed service, including join/connection idempotence, so the
//! core services can be exercised without a database.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use realconnect::database::ProfileStore;
use realconnect::models::{
    Connection, Event, EventAttendee, EventWithHost, UserProfile,
};
use realconnect::utils::errors::{RealConnectError, Result};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    profiles: HashMap<i64, UserProfile>,
    events: Vec<(Event, UserProfile)>,
    attendees: Vec<EventAttendee>,
    connections: Vec<Connection>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        1000 + self.next_id
    }

    fn other_endpoint(&self, connection: &Connection, user_id: i64) -> Option<UserProfile> {
        let other = if connection.from_user_id == user_id {
            connection.to_user_id
        } else {
            connection.from_user_id
        };
        self.profiles.get(&other).cloned()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_profile(&self, profile: UserProfile) {
        self.inner.lock().unwrap().profiles.insert(profile.id, profile);
    }

    pub fn add_event(&self, event: Event, host: UserProfile) {
        self.inner.lock().unwrap().events.push((event, host));
    }
}

impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>> {
        Ok(self.inner.lock().unwrap().profiles.get(&user_id).cloned())
    }

    async fn get_event(&self, event_id: i64) -> Result<Option<Event>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .events
            .iter()
            .find(|(event, _)| event.id == event_id)
            .map(|(event, _)| event.clone()))
    }

    async fn get_event_attendees(&self, event_id: i64) -> Result<Vec<UserProfile>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .attendees
            .iter()
            .filter(|attendee| attendee.event_id == event_id)
            .filter_map(|attendee| inner.profiles.get(&attendee.user_id).cloned())
            .collect())
    }

    async fn get_user_events(&self, user_id: i64) -> Result<Vec<Event>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .events
            .iter()
            .filter(|(event, _)| {
                inner
                    .attendees
                    .iter()
                    .any(|attendee| attendee.event_id == event.id && attendee.user_id == user_id)
            })
            .map(|(event, _)| event.clone())
            .collect())
    }

    async fn get_all_events(&self) -> Result<Vec<EventWithHost>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .events
            .iter()
            .map(|(event, host)| EventWithHost {
                event: event.clone(),
                host: host.clone(),
                attendee_count: inner
                    .attendees
                    .iter()
                    .filter(|attendee| attendee.event_id == event.id)
                    .count() as i64,
            })
            .collect())
    }

    async fn get_user_connections(&self, user_id: i64) -> Result<Vec<UserProfile>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .connections
            .iter()
            .filter(|connection| {
                connection.from_user_id == user_id || connection.to_user_id == user_id
            })
            .filter_map(|connection| inner.other_endpoint(connection, user_id))
            .collect())
    }

    async fn is_user_attending(&self, event_id: i64, user_id: i64) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .attendees
            .iter()
            .any(|attendee| attendee.event_id == event_id && attendee.user_id == user_id))
    }

    async fn join_event(&self, event_id: i64, user_id: i64) -> Result<EventAttendee> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.events.iter().any(|(event, _)| event.id == event_id) {
            return Err(RealConnectError::EventNotFound { event_id });
        }

        if let Some(existing) = inner
            .attendees
            .iter()
            .find(|attendee| attendee.event_id == event_id && attendee.user_id == user_id)
        {
            return Ok(existing.clone());
        }

        let attendee = EventAttendee {
            id: inner.next_id(),
            event_id,
            user_id,
            joined_at: Utc::now(),
        };
        inner.attendees.push(attendee.clone());
        Ok(attendee)
    }

    async fn leave_event(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.attendees.len();
        inner
            .attendees
            .retain(|attendee| !(attendee.event_id == event_id && attendee.user_id == user_id));
        Ok(inner.attendees.len() < before)
    }

    async fn create_connection(
        &self,
        from_user_id: i64,
        to_user_id: i64,
        event_id: i64,
    ) -> Result<Connection> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner.connections.iter().find(|connection| {
            connection.event_id == event_id
                && ((connection.from_user_id == from_user_id && connection.to_user_id == to_user_id)
                    || (connection.from_user_id == to_user_id && connection.to_user_id == from_user_id))
        }) {
            return Ok(existing.clone());
        }

        let connection = Connection {
            id: inner.next_id(),
            from_user_id,
            to_user_id,
            event_id,
            created_at: Utc::now(),
        };
        inner.connections.push(connection.clone());
        Ok(connection)
    }
}

/// Minimal profile with the given id; tests fill in matching attributes
pub fn profile(id: i64, full_name: &str) -> UserProfile {
    UserProfile {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        full_name: full_name.to_string(),
        age: 25,
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

/// Public event scheduled `days_ahead` days from now
pub fn event(id: i64, host_id: i64, name: &str, days_ahead: i64) -> Event {
    Event {
        id,
        host_id,
        name: name.to_string(),
        description: None,
        location: "Austin".to_string(),
        date: Utc::now() + Duration::days(days_ahead),
        join_code: format!("code-{id}"),
        is_active: true,
        is_public: true,
        visible_fields: None,
        created_at: Utc::now(),
    }
}
