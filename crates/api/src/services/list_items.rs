use infra::models::{ListItemRow, ListRow};
use infra::pagination::LimitOffset;
use infra::repos::{CreateListItemData, ItemRepo, ListItemRepo, ListRepo, UpdateListItemData};
use uuid::Uuid;

use super::parse_id;
use crate::error::AppError;
use crate::gql::domains::list_items::types::{CreateListItemInput, UpdateListItemInput};

/// Entries of a list. Access goes through the owning list: a user only sees
/// entries of their own lists and may only link their own items.
#[derive(Clone)]
pub struct ListItemService {
    repo: ListItemRepo,
    items: ItemRepo,
    lists: ListRepo,
}

impl ListItemService {
    pub fn new(repo: ListItemRepo, items: ItemRepo, lists: ListRepo) -> Self {
        Self { repo, items, lists }
    }

    async fn ensure_list(&self, list_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.lists
            .get_for_user(list_id, user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("List with id: {list_id} not found")))
    }

    async fn ensure_item(&self, item_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.items
            .get_for_user(item_id, user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Item with id: {item_id} not found")))
    }

    pub async fn create(
        &self,
        input: CreateListItemInput,
        user_id: Uuid,
    ) -> Result<ListItemRow, AppError> {
        let list_id = parse_id(input.list_id.as_str(), "list")?;
        let item_id = parse_id(input.item_id.as_str(), "item")?;

        self.ensure_list(list_id, user_id).await?;
        self.ensure_item(item_id, user_id).await?;

        Ok(self
            .repo
            .create(CreateListItemData {
                quantity: input.quantity,
                completed: input.completed,
                list_id,
                item_id,
            })
            .await?)
    }

    pub async fn find_all(
        &self,
        list: &ListRow,
        page: LimitOffset,
        search: Option<&str>,
    ) -> Result<Vec<ListItemRow>, AppError> {
        Ok(self.repo.list_for_list(list.id, search, page).await?)
    }

    pub async fn count_by_list(&self, list: &ListRow) -> Result<i64, AppError> {
        Ok(self.repo.count_for_list(list.id).await?)
    }

    pub async fn find_one(&self, id: Uuid, user_id: Uuid) -> Result<ListItemRow, AppError> {
        self.repo
            .get_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List item with id {id} not found")))
    }

    /// Apply only the provided fields. A new list or item must belong to the
    /// same user.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateListItemInput,
        user_id: Uuid,
    ) -> Result<ListItemRow, AppError> {
        self.find_one(id, user_id).await?;

        let list_id = match input.list_id {
            Some(ref list_id) => {
                let list_id = parse_id(list_id.as_str(), "list")?;
                self.ensure_list(list_id, user_id).await?;
                Some(list_id)
            }
            None => None,
        };
        let item_id = match input.item_id {
            Some(ref item_id) => {
                let item_id = parse_id(item_id.as_str(), "item")?;
                self.ensure_item(item_id, user_id).await?;
                Some(item_id)
            }
            None => None,
        };

        let data = UpdateListItemData {
            quantity: input.quantity,
            completed: input.completed,
            list_id,
            item_id,
        };

        if !data.is_empty() {
            self.repo.update(id, &data).await?;
        }

        self.find_one(id, user_id).await
    }

    pub async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<ListItemRow, AppError> {
        self.find_one(id, user_id).await?;
        self.repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List item with id {id} not found")))
    }
}
