//! User repository implementation

use sqlx::types::Json;
use sqlx::PgPool;
use crate::models::user::{User, UserProfile, CreateUserRequest, UpdateProfileRequest};
use crate::utils::errors::RealConnectError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user, returning the password-free profile
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserProfile, RealConnectError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO users (username, email, password, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, username, email, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at
            "#
        )
        .bind(request.username)
        .bind(request.email)
        .bind(request.password)
        .bind(request.full_name)
        .bind(request.age)
        .bind(request.hometown)
        .bind(request.state)
        .bind(request.college)
        .bind(request.high_school)
        .bind(request.school)
        .bind(request.background)
        .bind(request.aspirations)
        .bind(request.interests)
        .bind(request.social_links.map(Json))
        .bind(request.profile_photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Find a user profile by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserProfile>, RealConnectError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, username, email, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at FROM users WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Find the full user row by email (credential checks only)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RealConnectError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find the full user row by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, RealConnectError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at FROM users WHERE username = $1"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Apply a partial profile update; absent fields keep their values
    pub async fn update(&self, id: i64, request: UpdateProfileRequest) -> Result<UserProfile, RealConnectError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE users
            SET full_name = COALESCE($2, full_name),
                age = COALESCE($3, age),
                hometown = COALESCE($4, hometown),
                state = COALESCE($5, state),
                college = COALESCE($6, college),
                high_school = COALESCE($7, high_school),
                school = COALESCE($8, school),
                background = COALESCE($9, background),
                aspirations = COALESCE($10, aspirations),
                interests = COALESCE($11, interests),
                social_links = COALESCE($12, social_links),
                profile_photo = COALESCE($13, profile_photo)
            WHERE id = $1
            RETURNING id, username, email, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at
            "#
        )
        .bind(id)
        .bind(request.full_name)
        .bind(request.age)
        .bind(request.hometown)
        .bind(request.state)
        .bind(request.college)
        .bind(request.high_school)
        .bind(request.school)
        .bind(request.background)
        .bind(request.aspirations)
        .bind(request.interests)
        .bind(request.social_links.map(Json))
        .bind(request.profile_photo)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RealConnectError::UserNotFound { user_id: id })?;

        Ok(profile)
    }

    /// List user profiles with pagination
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UserProfile>, RealConnectError> {
        let profiles = sqlx::query_as::<_, UserProfile>(
            "SELECT id, username, email, full_name, age, hometown, state, college, high_school, school, background, aspirations, interests, social_links, profile_photo, created_at FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, RealConnectError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
