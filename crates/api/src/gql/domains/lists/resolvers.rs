use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::error::AppResultExt;
use crate::gql::types::{page, List};
use crate::services::parse_id;
use crate::state::AppState;

use super::types::{CreateListInput, UpdateListInput};

#[derive(Default)]
pub struct ListQuery;

#[Object]
impl ListQuery {
    async fn lists(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] offset: i32,
        #[graphql(default = 10, validator(minimum = 1))] limit: i32,
        search: Option<String>,
    ) -> Result<Vec<List>> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let rows = state
            .lists()
            .find_all(user.id, page(offset, limit), search.as_deref())
            .await
            .into_gql()?;
        Ok(rows.into_iter().map(List::from).collect())
    }

    async fn list(&self, ctx: &Context<'_>, id: ID) -> Result<List> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "list").into_gql()?;
        let row = state.lists().find_one(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct ListMutation;

#[Object]
impl ListMutation {
    async fn create_list(
        &self,
        ctx: &Context<'_>,
        create_list_input: CreateListInput,
    ) -> Result<List> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let row = state
            .lists()
            .create(create_list_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn update_list(
        &self,
        ctx: &Context<'_>,
        update_list_input: UpdateListInput,
    ) -> Result<List> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(update_list_input.id.as_str(), "list").into_gql()?;
        let row = state
            .lists()
            .update(id, update_list_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn remove_list(&self, ctx: &Context<'_>, id: ID) -> Result<List> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "list").into_gql()?;
        let row = state.lists().remove(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}
