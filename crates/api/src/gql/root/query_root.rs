use async_graphql::MergedObject;

use crate::gql::domains::auth::AuthQuery;
use crate::gql::domains::items::ItemQuery;
use crate::gql::domains::list_items::ListItemQuery;
use crate::gql::domains::lists::ListQuery;
use crate::gql::domains::users::UserQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthQuery, ItemQuery, ListItemQuery, ListQuery, UserQuery);
