use async_graphql::{Context, Object, Result};

use crate::auth::permissions::require_user;
use crate::gql::error::AppResultExt;
use crate::state::AppState;

use super::types::{AuthResponse, LoginInput, SignupInput};

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// Issue a fresh token for the current user.
    async fn revalidate(&self, ctx: &Context<'_>) -> Result<AuthResponse> {
        let user = require_user(ctx, &[]).await?;
        let state = ctx.data::<AppState>()?;
        state.auth().revalidate_token(user).into_gql()
    }
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    async fn signup(&self, ctx: &Context<'_>, signup_input: SignupInput) -> Result<AuthResponse> {
        let state = ctx.data::<AppState>()?;
        state.auth().signup(signup_input).await.into_gql()
    }

    async fn login(&self, ctx: &Context<'_>, login_input: LoginInput) -> Result<AuthResponse> {
        let state = ctx.data::<AppState>()?;
        state.auth().login(login_input).await.into_gql()
    }
}
