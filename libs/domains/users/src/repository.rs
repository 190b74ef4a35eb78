use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUserRecord, User};

/// Repository trait for User persistence.
///
/// All reads except `username_exists` are scoped by the visibility
/// filter: soft-deleted and inactive rows never surface. The uniqueness
/// check deliberately ignores both flags so a username stays reserved
/// even after its owner is deactivated or soft-deleted.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a visible user by id
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Page of visible users (newest created first) plus the total count.
    ///
    /// Count and page are two separate reads with no shared snapshot, so
    /// they may disagree under concurrent writes.
    async fn list(&self, offset: u64, limit: u64) -> UserResult<(Vec<User>, u64)>;

    /// Check whether a username was ever used, regardless of flags
    async fn username_exists(&self, username: &str) -> UserResult<bool>;

    /// Insert a new user and return it with generated id and timestamps
    async fn create(&self, record: NewUserRecord) -> UserResult<User>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Flip the active flag on an existing row
    pub async fn set_active(&self, id: i64, active: bool) {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            user.active = active;
            user.updated_at = Some(Utc::now());
        }
    }

    /// Mark an existing row as soft-deleted
    pub async fn soft_delete(&self, id: i64) {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            user.deleted_at = Some(Utc::now());
        }
    }

    fn is_visible(user: &User) -> bool {
        user.deleted_at.is_none() && user.active
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).filter(|u| Self::is_visible(u)).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<(Vec<User>, u64)> {
        let users = self.users.read().await;

        let mut visible: Vec<User> = users
            .values()
            .filter(|u| Self::is_visible(u))
            .cloned()
            .collect();
        let total = visible.len() as u64;

        // Newest first; id breaks ties for rows created in the same instant
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let page: Vec<User> = visible
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn create(&self, record: NewUserRecord) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Mirrors the store's unique constraint, flags included
        if users.values().any(|u| u.username == record.username) {
            return Err(UserError::UsernameConflict);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            password_hash: record.password_hash,
            active: record.active,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        };

        users.insert(id, user.clone());

        tracing::info!(user_id = id, username = %user.username, "Created user");
        Ok(user)
    }
}
