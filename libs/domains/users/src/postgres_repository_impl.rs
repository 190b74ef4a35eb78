use async_trait::async_trait;
use sea_orm::{DbBackend, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{NewUserRecord, User};
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: sea_orm::DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }
}

const USER_COLUMNS: &str = "id, username, first_name, last_name, email, phone, password_hash, active, created_at, updated_at, deleted_at";

/// Rows that pass this predicate are visible to reads
const VISIBLE: &str = "deleted_at IS NULL AND active = TRUE";

/// Helper struct for deserializing user rows from the database
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    username: String,
    first_name: Option<String>,
    last_name: Option<String>,
    email: String,
    phone: Option<String>,
    password_hash: String,
    active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
    deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND {VISIBLE}");

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(user_id = id, error = %e, "users.get_by_id query failed");
                UserError::Internal
            })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<(Vec<User>, u64)> {
        // Two separate reads without a transaction snapshot; the count is
        // an accepted approximation under concurrent writes.
        let count_sql = format!("SELECT COUNT(*) AS count FROM users WHERE {VISIBLE}");
        let count_stmt = Statement::from_sql_and_values(DbBackend::Postgres, count_sql, []);

        #[derive(FromQueryResult)]
        struct CountResult {
            count: i64,
        }

        let total = CountResult::find_by_statement(count_stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "users.list count query failed");
                UserError::Internal
            })?
            .map(|r| r.count as u64)
            .unwrap_or(0);

        let page_sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {VISIBLE} \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        let page_stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            page_sql,
            [(limit as i64).into(), (offset as i64).into()],
        );

        let rows = UserRow::find_by_statement(page_stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(offset, limit, error = %e, "users.list page query failed");
                UserError::Internal
            })?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    async fn username_exists(&self, username: &str) -> UserResult<bool> {
        // No visibility filter: the name stays reserved even when its
        // owner is inactive or soft-deleted.
        let sql = "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1) AS exists";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [username.into()]);

        #[derive(FromQueryResult)]
        struct ExistsResult {
            exists: bool,
        }

        let result = ExistsResult::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(username, error = %e, "users.username_exists query failed");
                UserError::Internal
            })?;

        Ok(result.map(|r| r.exists).unwrap_or(false))
    }

    async fn create(&self, record: NewUserRecord) -> UserResult<User> {
        let sql = format!(
            "INSERT INTO users (username, first_name, last_name, email, phone, password_hash, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        );

        let username = record.username.clone();
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                record.username.into(),
                record.first_name.into(),
                record.last_name.into(),
                record.email.into(),
                record.phone.into(),
                record.password_hash.into(),
                record.active.into(),
            ],
        );

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                    // Lost the race against a concurrent create for the
                    // same username; the constraint is the real guard.
                    UserError::UsernameConflict
                } else {
                    tracing::error!(username, error = %e, "users.create insert failed");
                    UserError::Internal
                }
            })?
            .ok_or_else(|| {
                tracing::error!(username, "users.create insert returned no row");
                UserError::Internal
            })?;

        Ok(row.into())
    }
}
