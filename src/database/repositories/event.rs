//! Event repository implementation

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use crate::models::event::{Event, EventAttendee, EventWithHost, FieldVisibility, CreateEventRequest, UpdateEventRequest};
use crate::models::user::{SocialLinks, UserProfile};
use crate::utils::errors::RealConnectError;
use crate::utils::helpers::generate_join_code;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

/// Flat row for the event/host join; assembled into [`EventWithHost`]
#[derive(FromRow)]
struct EventWithHostRow {
    id: i64,
    host_id: i64,
    name: String,
    description: Option<String>,
    location: String,
    date: DateTime<Utc>,
    join_code: String,
    is_active: bool,
    is_public: bool,
    visible_fields: Option<Json<FieldVisibility>>,
    created_at: DateTime<Utc>,
    host_username: String,
    host_email: String,
    host_full_name: String,
    host_age: i32,
    host_hometown: Option<String>,
    host_state: Option<String>,
    host_college: Option<String>,
    host_high_school: Option<String>,
    host_school: Option<String>,
    host_background: Option<String>,
    host_aspirations: Option<String>,
    host_interests: Option<Vec<String>>,
    host_social_links: Option<Json<SocialLinks>>,
    host_profile_photo: Option<String>,
    host_created_at: DateTime<Utc>,
    attendee_count: i64,
}

impl From<EventWithHostRow> for EventWithHost {
    fn from(row: EventWithHostRow) -> Self {
        EventWithHost {
            event: Event {
                id: row.id,
                host_id: row.host_id,
                name: row.name,
                description: row.description,
                location: row.location,
                date: row.date,
                join_code: row.join_code,
                is_active: row.is_active,
                is_public: row.is_public,
                visible_fields: row.visible_fields,
                created_at: row.created_at,
            },
            host: UserProfile {
                id: row.host_id,
                username: row.host_username,
                email: row.host_email,
                full_name: row.host_full_name,
                age: row.host_age,
                hometown: row.host_hometown,
                state: row.host_state,
                college: row.host_college,
                high_school: row.host_high_school,
                school: row.host_school,
                background: row.host_background,
                aspirations: row.host_aspirations,
                interests: row.host_interests,
                social_links: row.host_social_links,
                profile_photo: row.host_profile_photo,
                created_at: row.host_created_at,
            },
            attendee_count: row.attendee_count,
        }
    }
}

const PROFILE_COLUMNS: &str = "u.id, u.username, u.email, u.full_name, u.age, u.hometown, u.state, u.college, u.high_school, u.school, u.background, u.aspirations, u.interests, u.social_links, u.profile_photo, u.created_at";

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event with a freshly generated join code
    pub async fn create(&self, host_id: i64, request: CreateEventRequest) -> Result<Event, RealConnectError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (host_id, name, description, location, date, join_code, is_public, visible_fields)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, host_id, name, description, location, date, join_code, is_active, is_public, visible_fields, created_at
            "#
        )
        .bind(host_id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.location)
        .bind(request.date)
        .bind(generate_join_code())
        .bind(request.is_public)
        .bind(request.visible_fields.map(Json))
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RealConnectError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, host_id, name, description, location, date, join_code, is_active, is_public, visible_fields, created_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by its join code
    pub async fn find_by_join_code(&self, join_code: &str) -> Result<Option<Event>, RealConnectError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, host_id, name, description, location, date, join_code, is_active, is_public, visible_fields, created_at FROM events WHERE join_code = $1"
        )
        .bind(join_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Events hosted by a user
    pub async fn find_by_host(&self, host_id: i64) -> Result<Vec<Event>, RealConnectError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, host_id, name, description, location, date, join_code, is_active, is_public, visible_fields, created_at FROM events WHERE host_id = $1 ORDER BY date ASC"
        )
        .bind(host_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Update event; absent fields keep their values
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event, RealConnectError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                date = COALESCE($5, date),
                is_active = COALESCE($6, is_active),
                is_public = COALESCE($7, is_public),
                visible_fields = COALESCE($8, visible_fields)
            WHERE id = $1
            RETURNING id, host_id, name, description, location, date, join_code, is_active, is_public, visible_fields, created_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.location)
        .bind(request.date)
        .bind(request.is_active)
        .bind(request.is_public)
        .bind(request.visible_fields.map(Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RealConnectError::EventNotFound { event_id: id })?;

        Ok(event)
    }

    /// Delete event
    pub async fn delete(&self, id: i64) -> Result<bool, RealConnectError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All events with host profile and attendee count, ordered by date
    pub async fn list_with_hosts(&self) -> Result<Vec<EventWithHost>, RealConnectError> {
        let rows = sqlx::query_as::<_, EventWithHostRow>(
            r#"
            SELECT e.id, e.host_id, e.name, e.description, e.location, e.date, e.join_code, e.is_active, e.is_public, e.visible_fields, e.created_at,
                   u.username AS host_username, u.email AS host_email, u.full_name AS host_full_name, u.age AS host_age,
                   u.hometown AS host_hometown, u.state AS host_state, u.college AS host_college, u.high_school AS host_high_school,
                   u.school AS host_school, u.background AS host_background, u.aspirations AS host_aspirations,
                   u.interests AS host_interests, u.social_links AS host_social_links, u.profile_photo AS host_profile_photo,
                   u.created_at AS host_created_at,
                   (SELECT COUNT(*) FROM event_attendees ea WHERE ea.event_id = e.id) AS attendee_count
            FROM events e
            INNER JOIN users u ON e.host_id = u.id
            ORDER BY e.date ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EventWithHost::from).collect())
    }

    /// Profiles of everyone attending the event, in join order
    pub async fn get_attendees(&self, event_id: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        let attendees = sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            SELECT {PROFILE_COLUMNS}
            FROM event_attendees ea
            INNER JOIN users u ON ea.user_id = u.id
            WHERE ea.event_id = $1
            ORDER BY ea.joined_at ASC
            "#
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attendees)
    }

    /// Events the user attends, ordered by date
    pub async fn get_user_events(&self, user_id: i64) -> Result<Vec<Event>, RealConnectError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.host_id, e.name, e.description, e.location, e.date, e.join_code, e.is_active, e.is_public, e.visible_fields, e.created_at
            FROM event_attendees ea
            INNER JOIN events e ON ea.event_id = e.id
            WHERE ea.user_id = $1
            ORDER BY e.date ASC
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Check if user is attending the event
    pub async fn is_attending(&self, event_id: i64, user_id: i64) -> Result<bool, RealConnectError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM event_attendees WHERE event_id = $1 AND user_id = $2"
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }

    /// Record attendance. The unique constraint on (event_id, user_id) makes
    /// concurrent joins collapse to one row; re-joining returns the existing
    /// record.
    pub async fn join(&self, event_id: i64, user_id: i64) -> Result<EventAttendee, RealConnectError> {
        let inserted = sqlx::query_as::<_, EventAttendee>(
            r#"
            INSERT INTO event_attendees (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, user_id) DO NOTHING
            RETURNING id, event_id, user_id, joined_at
            "#
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(attendee) = inserted {
            return Ok(attendee);
        }

        let attendee = sqlx::query_as::<_, EventAttendee>(
            "SELECT id, event_id, user_id, joined_at FROM event_attendees WHERE event_id = $1 AND user_id = $2"
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendee)
    }

    /// Remove attendance; returns false when the user was not attending
    pub async fn leave(&self, event_id: i64, user_id: i64) -> Result<bool, RealConnectError> {
        let result = sqlx::query("DELETE FROM event_attendees WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get attendee count for event
    pub async fn attendee_count(&self, event_id: i64) -> Result<i64, RealConnectError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM event_attendees WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
