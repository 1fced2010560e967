//! Attendee visibility filtering
//!
//! Redacts attendee profiles according to the event's visible-fields
//! configuration and gates the attendee list on the requester's relationship
//! to the event. The gate is re-evaluated on every call; nothing here is
//! cached.

use tracing::{debug, warn};

use crate::database::store::ProfileStore;
use crate::models::event::FieldVisibility;
use crate::models::user::{UserProfile, VisibleProfile};
use crate::utils::errors::{RealConnectError, Result};

/// Redact a single attendee profile. `id` and `full_name` are always kept,
/// whatever the configuration says; every other field is carried over only
/// when its flag is set.
pub fn filter_attendee(profile: &UserProfile, visibility: &FieldVisibility) -> VisibleProfile {
    VisibleProfile {
        id: profile.id,
        full_name: profile.full_name.clone(),
        age: visibility.age.then_some(profile.age),
        hometown: if visibility.hometown { profile.hometown.clone() } else { None },
        state: if visibility.state { profile.state.clone() } else { None },
        college: if visibility.college { profile.college.clone() } else { None },
        high_school: if visibility.high_school { profile.high_school.clone() } else { None },
        school: if visibility.school { profile.school.clone() } else { None },
        background: if visibility.background { profile.background.clone() } else { None },
        aspirations: if visibility.aspirations { profile.aspirations.clone() } else { None },
        interests: if visibility.interests { profile.interests.clone() } else { None },
        social_links: if visibility.social_links {
            profile.social_links.as_ref().map(|links| links.0.clone())
        } else {
            None
        },
        profile_photo: if visibility.profile_photo { profile.profile_photo.clone() } else { None },
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityService<S> {
    store: S,
}

impl<S: ProfileStore> VisibilityService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Field-filtered attendee list for an event.
    ///
    /// Only the host, an attendee, or anyone at all for a public event may
    /// list attendees; everyone else gets `PermissionDenied`. A missing
    /// event is `EventNotFound`, distinct from an empty attendee list.
    pub async fn list_event_attendees(&self, event_id: i64, requester_id: i64) -> Result<Vec<VisibleProfile>> {
        let event = self
            .store
            .get_event(event_id)
            .await?
            .ok_or(RealConnectError::EventNotFound { event_id })?;

        let allowed = event.host_id == requester_id
            || event.is_public
            || self.store.is_user_attending(event_id, requester_id).await?;
        if !allowed {
            warn!(event_id = event_id, requester_id = requester_id, "Attendee list denied for private event");
            return Err(RealConnectError::PermissionDenied(
                "Attendee list is restricted to the host and attendees".to_string()
            ));
        }

        let visibility = event.visibility();
        let attendees = self.store.get_event_attendees(event_id).await?;
        debug!(event_id = event_id, count = attendees.len(), "Attendee list filtered");

        Ok(attendees
            .iter()
            .map(|attendee| filter_attendee(attendee, &visibility))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::user::SocialLinks;

    fn profile() -> UserProfile {
        UserProfile {
            id: 7,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            age: 28,
            hometown: Some("London".to_string()),
            state: Some("LN".to_string()),
            college: Some("Cambridge".to_string()),
            high_school: Some("Somerville".to_string()),
            school: None,
            background: Some("Mathematics".to_string()),
            aspirations: Some("Analytical engines".to_string()),
            interests: Some(vec!["computing".to_string()]),
            social_links: Some(sqlx::types::Json(SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
                website: None,
                twitter: None,
            })),
            profile_photo: Some("ada.jpg".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_cannot_be_hidden() {
        let visibility = FieldVisibility {
            full_name: false,
            ..FieldVisibility::default()
        };
        let view = filter_attendee(&profile(), &visibility);
        assert_eq!(view.full_name, "Ada Lovelace");
        assert_eq!(view.id, 7);
    }

    #[test]
    fn test_hidden_fields_are_omitted_not_nulled() {
        let visibility = FieldVisibility {
            age: false,
            hometown: false,
            social_links: false,
            ..FieldVisibility::default()
        };
        let view = filter_attendee(&profile(), &visibility);
        assert!(view.age.is_none());
        assert!(view.hometown.is_none());
        assert!(view.social_links.is_none());
        assert_eq!(view.state.as_deref(), Some("LN"));

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("age").is_none());
        assert!(json.get("hometown").is_none());
        assert!(json.get("social_links").is_none());
        assert!(json.get("state").is_some());
        assert!(json.get("full_name").is_some());
    }

    #[test]
    fn test_default_visibility_exposes_everything() {
        let view = filter_attendee(&profile(), &FieldVisibility::default());
        assert_eq!(view.age, Some(28));
        assert_eq!(view.hometown.as_deref(), Some("London"));
        assert_eq!(view.interests.as_deref(), Some(["computing".to_string()].as_slice()));
        assert!(view.social_links.is_some());
        assert_eq!(view.profile_photo.as_deref(), Some("ada.jpg"));
    }
}
