use crate::dto::user_dto::CreateUserPayload;
use crate::error::Result;
use crate::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Data access for the `users` table. Every operation is a single
/// parameterized statement; values only ever travel through bind
/// placeholders.
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns up to `limit` users in natural row order, skipping `offset`
    /// rows. Callers clamp both values beforehand.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, uuid, first_name, last_name, email, is_active, created, modified \
             FROM users LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to list users");
            e
        })?;

        Ok(users)
    }

    /// Inserts a row from the caller-supplied fields. The database fills in
    /// `uuid`, `created` and `modified` through column defaults, so creation
    /// stays a single atomic statement. The generated values are not read
    /// back.
    pub async fn create(&self, payload: CreateUserPayload) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (first_name, last_name, email, is_active) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(payload.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create user");
            e
        })?;

        Ok(())
    }

    /// Fetches the user with the given external identifier. A zero-row
    /// result surfaces as `Error::NotFound` rather than a generic database
    /// error.
    pub async fn get_by_uuid(&self, uuid: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, uuid, first_name, last_name, email, is_active, created, modified \
             FROM users WHERE uuid = $1",
        )
        .bind(uuid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                tracing::error!(error = %e, %uuid, "failed to fetch user");
            }
            e
        })?;

        Ok(user)
    }

    /// Deletes the user with the given external identifier. Matching zero
    /// rows is still success; delete is idempotent from the caller's side.
    pub async fn delete(&self, uuid: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %uuid, "failed to delete user");
                e
            })?;

        Ok(())
    }
}
