use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::{db::Db, models::UserRow};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    /// `None` keeps the column default (`{user}`).
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password_hash: Option<String>,
    pub roles: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub last_update_by: Option<Uuid>,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateUserData,
) -> SqlxResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, full_name, password_hash, roles)
        VALUES ($1, $2, $3, COALESCE($4, ARRAY['user']::TEXT[]))
        RETURNING id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
        "#,
    )
    .bind(&data.email)
    .bind(&data.full_name)
    .bind(&data.password_hash)
    .bind(&data.roles)
    .fetch_one(executor)
    .await
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM users").execute(executor).await?;
    Ok(result.rows_affected())
}

#[derive(Clone)]
pub struct UserRepo {
    pool: Db,
}

impl UserRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: CreateUserData) -> SqlxResult<UserRow> {
        insert(&self.pool, &data).await
    }

    /// All users, or only those holding at least one of `roles`.
    pub async fn list(&self, roles: &[String]) -> SqlxResult<Vec<UserRow>> {
        if roles.is_empty() {
            return sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
                FROM users
                ORDER BY full_name ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await;
        }

        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            FROM users
            WHERE roles && $1::TEXT[]
            ORDER BY full_name ASC
            "#,
        )
        .bind(roles)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> SqlxResult<Option<UserRow>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_by_email(&self, email: &str) -> SqlxResult<Option<UserRow>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_by_ids(&self, ids: &[Uuid]) -> SqlxResult<Vec<UserRow>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            FROM users
            WHERE id = ANY($1::uuid[])
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }

    /// Merge the provided fields into the stored user.
    pub async fn update(&self, id: Uuid, data: UpdateUserData) -> SqlxResult<Option<UserRow>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                full_name = COALESCE($3, full_name),
                password_hash = COALESCE($4, password_hash),
                roles = COALESCE($5, roles),
                is_active = COALESCE($6, is_active),
                last_update_by = COALESCE($7, last_update_by),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.full_name)
        .bind(&data.password_hash)
        .bind(&data.roles)
        .bind(data.is_active)
        .bind(data.last_update_by)
        .fetch_optional(&self.pool)
        .await
    }

    /// Disable a user and record who did it.
    pub async fn block(&self, id: Uuid, updated_by: Uuid) -> SqlxResult<Option<UserRow>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET is_active = false, last_update_by = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, full_name, password_hash, roles, is_active, last_update_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(updated_by)
        .fetch_optional(&self.pool)
        .await
    }
}
