use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::error::AppResultExt;
use crate::gql::types::{page, Item};
use crate::services::parse_id;
use crate::state::AppState;

use super::types::{CreateItemInput, UpdateItemInput};

#[derive(Default)]
pub struct ItemQuery;

#[Object]
impl ItemQuery {
    /// The caller's items ordered by name.
    async fn items(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] offset: i32,
        #[graphql(default = 10, validator(minimum = 1))] limit: i32,
        search: Option<String>,
    ) -> Result<Vec<Item>> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let rows = state
            .items()
            .find_all(user.id, page(offset, limit), search.as_deref())
            .await
            .into_gql()?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn item(&self, ctx: &Context<'_>, id: ID) -> Result<Item> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "item").into_gql()?;
        let row = state.items().find_one(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct ItemMutation;

#[Object]
impl ItemMutation {
    async fn create_item(
        &self,
        ctx: &Context<'_>,
        create_item_input: CreateItemInput,
    ) -> Result<Item> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let row = state
            .items()
            .create(create_item_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn update_item(
        &self,
        ctx: &Context<'_>,
        update_item_input: UpdateItemInput,
    ) -> Result<Item> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(update_item_input.id.as_str(), "item").into_gql()?;
        let row = state
            .items()
            .update(id, update_item_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    /// Delete an item; list entries that reference it go with it.
    async fn remove_item(&self, ctx: &Context<'_>, id: ID) -> Result<Item> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "item").into_gql()?;
        let row = state.items().remove(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}
