//! Event and people recommendation services
//!
//! Both recommenders are request-scoped: candidates are fetched fresh from
//! the store on every call, scored with the affinity rules and ranked. No
//! scores or candidate sets are cached.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::Utc;
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::database::store::ProfileStore;
use crate::models::event::EventWithHost;
use crate::models::user::UserProfile;
use crate::services::scoring::{score_event_for_user, score_pair};
use crate::utils::errors::Result;

/// Maximum events returned by [`RecommendationService::recommend_events`]
pub const MAX_EVENT_RECOMMENDATIONS: usize = 5;

/// Maximum people returned by [`RecommendationService::recommend_people`]
pub const MAX_PEOPLE_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone)]
pub struct RecommendationService<S> {
    store: S,
}

impl<S: ProfileStore> RecommendationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rank upcoming events the user has not joined.
    ///
    /// Users with no recorded interests get the unscored candidate list in
    /// store order. Ties keep store order; identical inputs always produce
    /// identical output.
    pub async fn recommend_events(&self, user_id: i64) -> Result<Vec<EventWithHost>> {
        let user = self.store.get_profile(user_id).await?;

        let attending: HashSet<i64> = self
            .store
            .get_user_events(user_id)
            .await?
            .iter()
            .map(|event| event.id)
            .collect();
        let now = Utc::now();
        let candidates: Vec<EventWithHost> = self
            .store
            .get_all_events()
            .await?
            .into_iter()
            .filter(|candidate| !attending.contains(&candidate.event.id) && candidate.event.date > now)
            .collect();

        let has_interests = user
            .as_ref()
            .and_then(|u| u.interests.as_ref())
            .is_some_and(|interests| !interests.is_empty());
        let Some(user) = user.filter(|_| has_interests) else {
            debug!(user_id = user_id, "No interests recorded, returning unscored upcoming events");
            return Ok(candidates.into_iter().take(MAX_EVENT_RECOMMENDATIONS).collect());
        };

        let attendee_lists = try_join_all(
            candidates
                .iter()
                .map(|candidate| self.store.get_event_attendees(candidate.event.id)),
        )
        .await?;

        let mut scored: Vec<(EventWithHost, f64)> = candidates
            .into_iter()
            .zip(attendee_lists)
            .map(|(candidate, attendees)| {
                let score = score_event_for_user(&user, &candidate, &attendees);
                (candidate, score)
            })
            .collect();
        // Stable sort keeps store order for equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let recommendations: Vec<EventWithHost> = scored
            .into_iter()
            .take(MAX_EVENT_RECOMMENDATIONS)
            .map(|(candidate, _)| candidate)
            .collect();

        info!(user_id = user_id, count = recommendations.len(), "Event recommendations computed");
        Ok(recommendations)
    }

    /// Rank people the user could connect with, scoped to one event when
    /// `event_id` is given and to every attended event otherwise.
    ///
    /// The user themself and anyone already connected are excluded, then
    /// candidates are deduplicated by id with the first occurrence winning.
    /// An unknown user yields an empty list.
    pub async fn recommend_people(&self, user_id: i64, event_id: Option<i64>) -> Result<Vec<UserProfile>> {
        let Some(user) = self.store.get_profile(user_id).await? else {
            debug!(user_id = user_id, "Profile not found, returning no people recommendations");
            return Ok(Vec::new());
        };

        let mut candidates: Vec<UserProfile> = match event_id {
            Some(event_id) => self.store.get_event_attendees(event_id).await?,
            None => {
                let events = self.store.get_user_events(user_id).await?;
                let attendee_lists = try_join_all(
                    events.iter().map(|event| self.store.get_event_attendees(event.id)),
                )
                .await?;
                attendee_lists.into_iter().flatten().collect()
            }
        };

        let connected: HashSet<i64> = self
            .store
            .get_user_connections(user_id)
            .await?
            .iter()
            .map(|profile| profile.id)
            .collect();
        candidates.retain(|candidate| candidate.id != user_id && !connected.contains(&candidate.id));

        let mut seen = HashSet::new();
        candidates.retain(|candidate| seen.insert(candidate.id));

        let mut scored: Vec<(UserProfile, f64)> = candidates
            .into_iter()
            .map(|candidate| {
                let score = score_pair(&user, &candidate);
                (candidate, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let recommendations: Vec<UserProfile> = scored
            .into_iter()
            .take(MAX_PEOPLE_RECOMMENDATIONS)
            .map(|(candidate, _)| candidate)
            .collect();

        info!(user_id = user_id, event_id = event_id, count = recommendations.len(), "People recommendations computed");
        Ok(recommendations)
    }
}
