use async_graphql::{Context, Object, Result};

use crate::gql::error::AppResultExt;
use crate::state::AppState;

#[derive(Default)]
pub struct SeedMutation;

#[Object]
impl SeedMutation {
    /// Wipe all data and load the fixed demo set. Refused in production.
    async fn execute_seed(&self, ctx: &Context<'_>) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        state.seed().execute_seed().await.into_gql()
    }
}
