use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::{
    db::Db,
    models::ItemRow,
    pagination::{search_pattern, LimitOffset},
};

#[derive(Debug, Clone)]
pub struct CreateItemData {
    pub name: String,
    pub quantity_units: Option<String>,
    pub user_id: Uuid,
}

/// `None` leaves a column untouched. `Some(None)` clears the unit.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemData {
    pub name: Option<String>,
    pub quantity_units: Option<Option<String>>,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateItemData,
) -> SqlxResult<ItemRow> {
    sqlx::query_as::<_, ItemRow>(
        r#"
        INSERT INTO items (name, quantity_units, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, quantity_units, user_id, created_at, updated_at
        "#,
    )
    .bind(&data.name)
    .bind(&data.quantity_units)
    .bind(data.user_id)
    .fetch_one(executor)
    .await
}

/// Page through a user's items ordered by name, optionally filtered by a
/// case-insensitive substring of the name.
pub async fn list_for_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
    search: Option<&str>,
    page: LimitOffset,
) -> SqlxResult<Vec<ItemRow>> {
    let mut query = sqlx::QueryBuilder::new(
        "SELECT id, name, quantity_units, user_id, created_at, updated_at FROM items WHERE user_id = ",
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

    query.build_query_as::<ItemRow>().fetch_all(executor).await
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM items").execute(executor).await?;
    Ok(result.rows_affected())
}

#[derive(Clone)]
pub struct ItemRepo {
    pool: Db,
}

impl ItemRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: CreateItemData) -> SqlxResult<ItemRow> {
        insert(&self.pool, &data).await
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        search: Option<&str>,
        page: LimitOffset,
    ) -> SqlxResult<Vec<ItemRow>> {
        list_for_user(&self.pool, user_id, search, page).await
    }

    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> SqlxResult<Option<ItemRow>> {
        sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity_units, user_id, created_at, updated_at
            FROM items
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_by_ids(&self, ids: &[Uuid]) -> SqlxResult<Vec<ItemRow>> {
        sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, quantity_units, user_id, created_at, updated_at
            FROM items
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
        data: UpdateItemData,
    ) -> SqlxResult<Option<ItemRow>> {
        sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET name = COALESCE($3, name),
                quantity_units = CASE WHEN $4 THEN $5 ELSE quantity_units END,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, quantity_units, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.name)
        .bind(data.quantity_units.is_some())
        .bind(data.quantity_units.flatten())
        .fetch_optional(&self.pool)
        .await
    }

    /// Hard delete. Linked list items go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> SqlxResult<Option<ItemRow>> {
        sqlx::query_as::<_, ItemRow>(
            r#"
            DELETE FROM items
            WHERE id = $1 AND user_id = $2
            RETURNING id, name, quantity_units, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> SqlxResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
