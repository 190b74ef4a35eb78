use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity - matches SQL schema
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-generated surrogate key
    pub id: i64,
    /// Unique username
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Inactive accounts are hidden from all reads
    pub active: bool,
    /// Creation timestamp, set by the store on insert
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, set on mutation
    pub updated_at: Option<DateTime<Utc>>,
    /// Non-null marks a soft-deleted, permanently hidden record
    pub deleted_at: Option<DateTime<Utc>>,
}

/// DTO for registering a new user.
///
/// Required fields are modeled as `Option` so that a missing field fails
/// the `required` rule (with its own message) instead of body
/// deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 3, max = 50))]
    pub username: Option<String>,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 10, max = 13))]
    pub phone: Option<String>,
    #[validate(required, length(min = 8))]
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Collapse the validated request into its concrete payload.
    ///
    /// Returns `None` when a required field is absent, which can only
    /// happen if validation was skipped.
    pub fn into_new_user(self) -> Option<NewUser> {
        Some(NewUser {
            username: self.username?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email?,
            phone: self.phone?,
            password: self.password?,
        })
    }
}

/// A validated registration payload with the plaintext credential.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Row the repository inserts; credential already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub active: bool,
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Map a page of entities into response DTOs.
pub fn to_response_list(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}
