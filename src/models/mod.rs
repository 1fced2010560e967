//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod connection;
pub mod admin;

// Re-export commonly used models
pub use user::{User, UserProfile, VisibleProfile, SocialLinks, CreateUserRequest, UpdateProfileRequest};
pub use event::{Event, EventWithHost, EventAttendee, FieldVisibility, CreateEventRequest, UpdateEventRequest};
pub use connection::{Connection, CreateConnectionRequest};
pub use admin::{AdminPrivilege, AdminLevel, Role};
