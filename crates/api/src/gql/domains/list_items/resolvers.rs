use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_user;
use crate::gql::error::AppResultExt;
use crate::gql::types::ListItem;
use crate::services::parse_id;
use crate::state::AppState;

use super::types::{CreateListItemInput, UpdateListItemInput};

#[derive(Default)]
pub struct ListItemQuery;

#[Object]
impl ListItemQuery {
    async fn list_item(&self, ctx: &Context<'_>, id: ID) -> Result<ListItem> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "list item").into_gql()?;
        let row = state.list_items().find_one(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct ListItemMutation;

#[Object]
impl ListItemMutation {
    /// Put one of the caller's items on one of their lists.
    async fn create_list_item(
        &self,
        ctx: &Context<'_>,
        create_list_item_input: CreateListItemInput,
    ) -> Result<ListItem> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let row = state
            .list_items()
            .create(create_list_item_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn update_list_item(
        &self,
        ctx: &Context<'_>,
        update_list_item_input: UpdateListItemInput,
    ) -> Result<ListItem> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(update_list_item_input.id.as_str(), "list item").into_gql()?;
        let row = state
            .list_items()
            .update(id, update_list_item_input, user.id)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    async fn remove_list_item(&self, ctx: &Context<'_>, id: ID) -> Result<ListItem> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "list item").into_gql()?;
        let row = state.list_items().remove(id, user.id).await.into_gql()?;
        Ok(row.into())
    }
}
