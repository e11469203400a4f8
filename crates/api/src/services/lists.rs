use infra::models::ListRow;
use infra::pagination::LimitOffset;
use infra::repos::{CreateListData, ListRepo, UpdateListData};
use uuid::Uuid;

use crate::error::AppError;
use crate::gql::domains::lists::types::{CreateListInput, UpdateListInput};

#[derive(Clone)]
pub struct ListsService {
    repo: ListRepo,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("List with id: {id} not found"))
}

impl ListsService {
    pub fn new(repo: ListRepo) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateListInput, user_id: Uuid) -> Result<ListRow, AppError> {
        Ok(self
            .repo
            .create(CreateListData {
                name: input.name,
                user_id,
            })
            .await?)
    }

    pub async fn find_all(
        &self,
        user_id: Uuid,
        page: LimitOffset,
        search: Option<&str>,
    ) -> Result<Vec<ListRow>, AppError> {
        Ok(self.repo.list_for_user(user_id, search, page).await?)
    }

    pub async fn find_one(&self, id: Uuid, user_id: Uuid) -> Result<ListRow, AppError> {
        self.repo
            .get_for_user(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateListInput,
        user_id: Uuid,
    ) -> Result<ListRow, AppError> {
        self.repo
            .update(id, user_id, UpdateListData { name: input.name })
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<ListRow, AppError> {
        self.repo
            .delete(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        Ok(self.repo.count_for_user(user_id).await?)
    }
}
