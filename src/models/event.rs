//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::user::UserProfile;

fn default_visible() -> bool {
    true
}

/// Per-event visibility flags for attendee profile fields.
///
/// Stored as JSON on the event row. Missing keys default to visible and
/// unknown keys are dropped on load, so only this enumerated set of fields
/// can ever be configured. The `full_name` flag is stored but the filter
/// never honors a false value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldVisibility {
    #[serde(default = "default_visible")]
    pub full_name: bool,
    #[serde(default = "default_visible")]
    pub age: bool,
    #[serde(default = "default_visible")]
    pub hometown: bool,
    #[serde(default = "default_visible")]
    pub state: bool,
    #[serde(default = "default_visible")]
    pub college: bool,
    #[serde(default = "default_visible")]
    pub high_school: bool,
    #[serde(default = "default_visible")]
    pub school: bool,
    #[serde(default = "default_visible")]
    pub background: bool,
    #[serde(default = "default_visible")]
    pub aspirations: bool,
    #[serde(default = "default_visible")]
    pub interests: bool,
    #[serde(default = "default_visible")]
    pub social_links: bool,
    #[serde(default = "default_visible")]
    pub profile_photo: bool,
}

impl Default for FieldVisibility {
    fn default() -> Self {
        Self {
            full_name: true,
            age: true,
            hometown: true,
            state: true,
            college: true,
            high_school: true,
            school: true,
            background: true,
            aspirations: true,
            interests: true,
            social_links: true,
            profile_photo: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub host_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub date: DateTime<Utc>,
    pub join_code: String,
    pub is_active: bool,
    pub is_public: bool,
    pub visible_fields: Option<Json<FieldVisibility>>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Current visibility configuration, substituting the all-visible default
    /// when none was stored.
    pub fn visibility(&self) -> FieldVisibility {
        self.visible_fields
            .as_ref()
            .map(|v| v.0.clone())
            .unwrap_or_default()
    }
}

/// Event with its host profile and current attendee count attached
#[derive(Debug, Clone, Serialize)]
pub struct EventWithHost {
    #[serde(flatten)]
    pub event: Event,
    pub host: UserProfile,
    pub attendee_count: i64,
}

/// Attendance record linking a user to an event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventAttendee {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub date: DateTime<Utc>,
    pub is_public: bool,
    pub visible_fields: Option<FieldVisibility>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
    pub visible_fields: Option<FieldVisibility>,
}
