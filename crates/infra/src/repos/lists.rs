use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::{
    db::Db,
    models::ListRow,
    pagination::{search_pattern, LimitOffset},
};

#[derive(Debug, Clone)]
pub struct CreateListData {
    pub name: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateListData {
    pub name: Option<String>,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateListData,
) -> SqlxResult<ListRow> {
    sqlx::query_as::<_, ListRow>(
        r#"
        INSERT INTO lists (name, user_id)
        VALUES ($1, $2)
        RETURNING id, name, user_id, created_at, updated_at
        "#,
    )
    .bind(&data.name)
    .bind(data.user_id)
    .fetch_one(executor)
    .await
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM lists").execute(executor).await?;
    Ok(result.rows_affected())
}

#[derive(Clone)]
pub struct ListRepo {
    pool: Db,
}

impl ListRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: CreateListData) -> SqlxResult<ListRow> {
        insert(&self.pool, &data).await
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        search: Option<&str>,
        page: LimitOffset,
    ) -> SqlxResult<Vec<ListRow>> {
        let mut query = sqlx::QueryBuilder::new(
            "SELECT id, name, user_id, created_at, updated_at FROM lists WHERE user_id = ",
        );
        query.push_bind(user_id);

        if let Some(pattern) = search_pattern(search) {
            query.push(" AND LOWER(name) LIKE ");
            query.push_bind(pattern);
            query.push(" ESCAPE '\\'");
        }

        query.push(" ORDER BY LOWER(name) ASC, name ASC, id ASC");
        query.push(" LIMIT ");
        query.push_bind(page.limit);
        query.push(" OFFSET ");
        query.push_bind(page.offset);

        query
            .build_query_as::<ListRow>()
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> SqlxResult<Option<ListRow>> {
        sqlx::query_as::<_, ListRow>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM lists
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_by_ids(&self, ids: &[Uuid]) -> SqlxResult<Vec<ListRow>> {
        sqlx::query_as::<_, ListRow>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM lists
            WHERE id = ANY($1::uuid[])
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        data: UpdateListData,
    ) -> SqlxResult<Option<ListRow>> {
        sqlx::query_as::<_, ListRow>(
            r#"
            UPDATE lists
            SET name = COALESCE($3, name), updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.name)
        .fetch_optional(&self.pool)
        .await
    }

    /// Hard delete. The list's items go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> SqlxResult<Option<ListRow>> {
        sqlx::query_as::<_, ListRow>(
            r#"
            DELETE FROM lists
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> SqlxResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
