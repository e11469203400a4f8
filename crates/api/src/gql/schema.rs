use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{ItemLoader, ListLoader, UserLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    let user_loader = DataLoader::new(UserLoader::new(state.db.clone()), tokio::spawn);
    let item_loader = DataLoader::new(ItemLoader::new(state.db.clone()), tokio::spawn);
    let list_loader = DataLoader::new(ListLoader::new(state.db.clone()), tokio::spawn);

    let introspection_enabled = state.config().introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .data(user_loader)
    .data(item_loader)
    .data(list_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
