use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use axum_helpers::PaginationRequest;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, NewUserRecord, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a user by ID.
    ///
    /// Every repository failure is reported as `NotFound`; the lookup
    /// does not distinguish a missing row from a failed query.
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        let user = match self.repository.get_by_id(id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UserError::NotFound),
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "user lookup failed, reporting not found");
                return Err(UserError::NotFound);
            }
        };

        // The repository's visibility filter already excludes inactive
        // rows, so this branch only fires if that filter changes. The
        // service stays the owner of the Inactive classification.
        if !user.active {
            return Err(UserError::Inactive);
        }

        Ok(user)
    }

    /// Page of users plus the total visible count
    pub async fn list_users(&self, pagination: &PaginationRequest) -> UserResult<(Vec<User>, u64)> {
        self.repository
            .list(pagination.offset(), pagination.limit())
            .await
    }

    /// Register a new user.
    ///
    /// The username pre-check is advisory; a concurrent create for the
    /// same name is caught by the store's unique constraint, which the
    /// repository reports as `UsernameConflict`.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserResult<User> {
        let new_user = request.into_new_user().ok_or(UserError::Validation)?;

        if self.repository.username_exists(&new_user.username).await? {
            return Err(UserError::UsernameConflict);
        }

        // Argon2 is deliberately slow; keep it off the async workers
        let password = new_user.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing task panicked");
                UserError::Internal
            })??;

        let record = NewUserRecord {
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: Some(new_user.phone),
            password_hash,
            active: true,
        };

        self.repository.create(record).await
    }
}

/// Hash a plaintext password with a fresh random salt.
///
/// The PHC output string encodes the salt and parameters, so
/// verification needs no side channel.
fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            UserError::Internal
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_produces_phc_string() {
        let hash = hash_password("correct-horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, hash_password("correct-horse").unwrap()); // fresh salt
    }
}
