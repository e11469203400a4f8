use async_graphql::{Context, Object, Result, ID};

use crate::auth::permissions::require_admin;
use crate::gql::error::AppResultExt;
use crate::gql::types::{User, ValidRoles};
use crate::services::parse_id;
use crate::state::AppState;

use super::types::UpdateUserInput;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// All users, or those holding any of `roles`. Admins only.
    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] roles: Vec<ValidRoles>,
    ) -> Result<Vec<User>> {
        require_admin(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let rows = state.users().find_all(&roles).await.into_gql()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        require_admin(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "user").into_gql()?;
        let row = state.users().find_one_by_id(id).await.into_gql()?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        update_user_input: UpdateUserInput,
    ) -> Result<User> {
        let admin = require_admin(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(update_user_input.id.as_str(), "user").into_gql()?;
        let row = state
            .users()
            .update(id, update_user_input, &admin)
            .await
            .into_gql()?;
        Ok(row.into())
    }

    /// Deactivate a user. Blocked users can no longer log in or use tokens.
    async fn block_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let admin = require_admin(ctx).await?;
        let state = ctx.data::<AppState>()?;
        let id = parse_id(id.as_str(), "user").into_gql()?;
        let row = state.users().block(id, &admin).await.into_gql()?;
        Ok(row.into())
    }
}
