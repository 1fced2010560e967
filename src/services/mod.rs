//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod connection;
pub mod recommendation;
pub mod scoring;
pub mod visibility;

// Re-export commonly used services
pub use auth::AuthorizationService;
pub use connection::ConnectionService;
pub use recommendation::{RecommendationService, MAX_EVENT_RECOMMENDATIONS, MAX_PEOPLE_RECOMMENDATIONS};
pub use scoring::{score_pair, score_event_for_user, PairRule, PAIR_RULES};
pub use visibility::{VisibilityService, filter_attendee};

use crate::database::DatabaseService;

/// Service factory wiring every service over the shared database store
#[derive(Clone)]
pub struct ServiceFactory {
    pub recommendation_service: RecommendationService<DatabaseService>,
    pub visibility_service: VisibilityService<DatabaseService>,
    pub connection_service: ConnectionService<DatabaseService>,
    pub authorization_service: AuthorizationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService) -> Self {
        let recommendation_service = RecommendationService::new(database.clone());
        let visibility_service = VisibilityService::new(database.clone());
        let connection_service = ConnectionService::new(database.clone());
        let authorization_service =
            AuthorizationService::new(database.users.clone(), database.admin.clone());

        Self {
            recommendation_service,
            visibility_service,
            connection_service,
            authorization_service,
        }
    }
}
