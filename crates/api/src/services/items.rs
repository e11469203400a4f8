use async_graphql::MaybeUndefined;
use infra::models::ItemRow;
use infra::pagination::LimitOffset;
use infra::repos::{CreateItemData, ItemRepo, UpdateItemData};
use uuid::Uuid;

use crate::error::AppError;
use crate::gql::domains::items::types::{CreateItemInput, UpdateItemInput};

/// Items are always scoped to their owner: someone else's item reads as
/// missing.
#[derive(Clone)]
pub struct ItemsService {
    repo: ItemRepo,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Item with id: {id} not found"))
}

impl ItemsService {
    pub fn new(repo: ItemRepo) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateItemInput, user_id: Uuid) -> Result<ItemRow, AppError> {
        Ok(self
            .repo
            .create(CreateItemData {
                name: input.name,
                quantity_units: input.quantity_units,
                user_id,
            })
            .await?)
    }

    pub async fn find_all(
        &self,
        user_id: Uuid,
        page: LimitOffset,
        search: Option<&str>,
    ) -> Result<Vec<ItemRow>, AppError> {
        Ok(self.repo.list_for_user(user_id, search, page).await?)
    }

    pub async fn find_one(&self, id: Uuid, user_id: Uuid) -> Result<ItemRow, AppError> {
        self.repo
            .get_for_user(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateItemInput,
        user_id: Uuid,
    ) -> Result<ItemRow, AppError> {
        let data = UpdateItemData {
            name: input.name,
            quantity_units: match input.quantity_units {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(units) => Some(Some(units)),
            },
        };
        self.repo
            .update(id, user_id, data)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete the item (and every list entry pointing at it) and hand back
    /// what was removed.
    pub async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<ItemRow, AppError> {
        self.repo
            .delete(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        Ok(self.repo.count_for_user(user_id).await?)
    }
}
