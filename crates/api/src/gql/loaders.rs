use async_graphql::dataloader::Loader;
use infra::db::Db;
use infra::models::{ItemRow, ListRow, UserRow};
use infra::repos::{ItemRepo, ListRepo, UserRepo};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

// UserLoader - batch load users by ID
#[derive(Clone)]
pub struct UserLoader {
    repo: UserRepo,
}

impl UserLoader {
    pub fn new(pool: Db) -> Self {
        Self {
            repo: UserRepo::new(pool),
        }
    }
}

impl Loader<Uuid> for UserLoader {
    type Value = UserRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let repo = self.repo.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            let rows = repo.list_by_ids(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

#[derive(Clone)]
pub struct ItemLoader {
    repo: ItemRepo,
}

impl ItemLoader {
    pub fn new(pool: Db) -> Self {
        Self {
            repo: ItemRepo::new(pool),
        }
    }
}

impl Loader<Uuid> for ItemLoader {
    type Value = ItemRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let repo = self.repo.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            let rows = repo.list_by_ids(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

#[derive(Clone)]
pub struct ListLoader {
    repo: ListRepo,
}

impl ListLoader {
    pub fn new(pool: Db) -> Self {
        Self {
            repo: ListRepo::new(pool),
        }
    }
}

impl Loader<Uuid> for ListLoader {
    type Value = ListRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let repo = self.repo.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            let rows = repo.list_by_ids(&ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
