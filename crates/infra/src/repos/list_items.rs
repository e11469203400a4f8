use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::{
    db::Db,
    models::ListItemRow,
    pagination::{search_pattern, LimitOffset},
};

#[derive(Debug, Clone)]
pub struct CreateListItemData {
    pub quantity: i32,
    pub completed: bool,
    pub list_id: Uuid,
    pub item_id: Uuid,
}

/// Columns left as `None` are not touched by [`ListItemRepo::update`].
#[derive(Debug, Clone, Default)]
pub struct UpdateListItemData {
    pub quantity: Option<i32>,
    pub completed: Option<bool>,
    pub list_id: Option<Uuid>,
    pub item_id: Option<Uuid>,
}

impl UpdateListItemData {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.completed.is_none()
            && self.list_id.is_none()
            && self.item_id.is_none()
    }
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    data: &CreateListItemData,
) -> SqlxResult<ListItemRow> {
    sqlx::query_as::<_, ListItemRow>(
        r#"
        INSERT INTO list_items (quantity, completed, list_id, item_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, quantity, completed, list_id, item_id, created_at, updated_at
        "#,
    )
    .bind(data.quantity)
    .bind(data.completed)
    .bind(data.list_id)
    .bind(data.item_id)
    .fetch_one(executor)
    .await
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM list_items")
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

#[derive(Clone)]
pub struct ListItemRepo {
    pool: Db,
}

impl ListItemRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: CreateListItemData) -> SqlxResult<ListItemRow> {
        insert(&self.pool, &data).await
    }

    /// Entries of one list, joined with their item so the search applies to
    /// the item name. Ordered by item name.
    pub async fn list_for_list(
        &self,
        list_id: Uuid,
        search: Option<&str>,
        page: LimitOffset,
    ) -> SqlxResult<Vec<ListItemRow>> {
        let mut query = sqlx::QueryBuilder::new(
            r#"SELECT li.id, li.quantity, li.completed, li.list_id, li.item_id, li.created_at, li.updated_at
            FROM list_items li
            INNER JOIN items i ON i.id = li.item_id
            WHERE li.list_id = "#,
        );
        query.push_bind(list_id);

        if let Some(pattern) = search_pattern(search) {
            query.push(" AND LOWER(i.name) LIKE ");
            query.push_bind(pattern);
            query.push(" ESCAPE '\\'");
        }

        query.push(" ORDER BY LOWER(i.name) ASC, i.name ASC, li.id ASC");
        query.push(" LIMIT ");
        query.push_bind(page.limit);
        query.push(" OFFSET ");
        query.push_bind(page.offset);

        query
            .build_query_as::<ListItemRow>()
            .fetch_all(&self.pool)
            .await
    }

    pub async fn count_for_list(&self, list_id: Uuid) -> SqlxResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM list_items WHERE list_id = $1")
            .bind(list_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Fetch an entry only if its list belongs to `user_id`.
    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> SqlxResult<Option<ListItemRow>> {
        sqlx::query_as::<_, ListItemRow>(
            r#"
            SELECT li.id, li.quantity, li.completed, li.list_id, li.item_id, li.created_at, li.updated_at
            FROM list_items li
            INNER JOIN lists l ON l.id = li.list_id
            WHERE li.id = $1 AND l.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Set only the provided columns. Returns the number of rows touched.
    pub async fn update(&self, id: Uuid, data: &UpdateListItemData) -> SqlxResult<u64> {
        let mut query = sqlx::QueryBuilder::new("UPDATE list_items SET updated_at = NOW()");

        if let Some(quantity) = data.quantity {
            query.push(", quantity = ");
            query.push_bind(quantity);
        }
        if let Some(completed) = data.completed {
            query.push(", completed = ");
            query.push_bind(completed);
        }
        if let Some(list_id) = data.list_id {
            query.push(", list_id = ");
            query.push_bind(list_id);
        }
        if let Some(item_id) = data.item_id {
            query.push(", item_id = ");
            query.push_bind(item_id);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Uuid) -> SqlxResult<Option<ListItemRow>> {
        sqlx::query_as::<_, ListItemRow>(
            r#"
            DELETE FROM list_items
            WHERE id = $1
            RETURNING id, quantity, completed, list_id, item_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
