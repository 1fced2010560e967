//! User profile models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Social link URLs, keyed by a fixed set of platforms. Absent entries mean
/// the user did not provide that link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Full user row, including credentials. Only the auth layer reads this;
/// everything else works with [`UserProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: i32,
    pub hometown: Option<String>,
    pub state: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub school: Option<String>,
    pub background: Option<String>,
    pub aspirations: Option<String>,
    pub interests: Option<Vec<String>>,
    pub social_links: Option<Json<SocialLinks>>,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User profile as exposed to the rest of the system (password stripped)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub age: i32,
    pub hometown: Option<String>,
    pub state: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub school: Option<String>,
    pub background: Option<String>,
    pub aspirations: Option<String>,
    pub interests: Option<Vec<String>>,
    pub social_links: Option<Json<SocialLinks>>,
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            age: user.age,
            hometown: user.hometown,
            state: user.state,
            college: user.college,
            high_school: user.high_school,
            school: user.school,
            background: user.background,
            aspirations: user.aspirations,
            interests: user.interests,
            social_links: user.social_links,
            profile_photo: user.profile_photo,
            created_at: user.created_at,
        }
    }
}

/// Redacted attendee view produced by the visibility filter. Hidden fields
/// are omitted from serialized output entirely rather than emitted as null;
/// `id` and `full_name` are always present.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleProfile {
    pub id: i64,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspirations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: i32,
    pub hometown: Option<String>,
    pub state: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub school: Option<String>,
    pub background: Option<String>,
    pub aspirations: Option<String>,
    pub interests: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub profile_photo: Option<String>,
}

/// Partial profile update; only provided fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub hometown: Option<String>,
    pub state: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub school: Option<String>,
    pub background: Option<String>,
    pub aspirations: Option<String>,
    pub interests: Option<Vec<String>>,
    pub social_links: Option<SocialLinks>,
    pub profile_photo: Option<String>,
}
