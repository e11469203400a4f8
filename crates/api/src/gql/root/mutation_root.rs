use async_graphql::MergedObject;

use crate::gql::domains::auth::AuthMutation;
use crate::gql::domains::items::ItemMutation;
use crate::gql::domains::list_items::ListItemMutation;
use crate::gql::domains::lists::ListMutation;
use crate::gql::domains::seed::SeedMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AuthMutation,
    ItemMutation,
    ListItemMutation,
    ListMutation,
    SeedMutation,
    UserMutation,
);
