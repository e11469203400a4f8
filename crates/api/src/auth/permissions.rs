use async_graphql::{Context, ErrorExtensions, Result};
use infra::models::UserRow;
use uuid::Uuid;

use crate::auth::{Claims, InvalidToken};
use crate::error::AppError;
use crate::gql::error::AppResultExt;
use crate::gql::types::ValidRoles;
use crate::state::AppState;

/// Resolve the authenticated, active user behind the request token.
///
/// With a non-empty `roles`, the user must also hold at least one of them.
pub async fn require_user(ctx: &Context<'_>, roles: &[ValidRoles]) -> Result<UserRow> {
    if ctx.data_opt::<InvalidToken>().is_some() {
        return Err(AppError::Unauthorized("Token not valid".to_string()).extend());
    }
    let claims = ctx
        .data::<Claims>()
        .map_err(|_| AppError::Unauthorized("Token needed".to_string()).extend())?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token not valid".to_string()).extend())?;

    let state = ctx.data::<AppState>()?;
    let user = state.auth().validate_user(user_id).await.into_gql()?;

    if !has_any_role(&user.roles, roles) {
        let wanted: Vec<&str> = roles.iter().map(ValidRoles::as_str).collect();
        return Err(AppError::Forbidden(format!(
            "User {} need a valid role: [{}]",
            user.full_name,
            wanted.join(", ")
        ))
        .extend());
    }

    Ok(user)
}

pub async fn require_admin(ctx: &Context<'_>) -> Result<UserRow> {
    require_user(ctx, &[ValidRoles::Admin]).await
}

/// The viewer must be `owner_id` themself or an admin.
pub async fn require_self_or_admin(ctx: &Context<'_>, owner_id: Uuid) -> Result<UserRow> {
    let viewer = require_user(ctx, &[]).await?;
    if viewer.id == owner_id || has_any_role(&viewer.roles, &[ValidRoles::Admin]) {
        return Ok(viewer);
    }
    Err(AppError::Forbidden("You can only see your own data".to_string()).extend())
}

fn has_any_role(user_roles: &[String], required: &[ValidRoles]) -> bool {
    required.is_empty()
        || required
            .iter()
            .any(|role| user_roles.iter().any(|r| r == role.as_str()))
}
