use async_graphql::{InputObject, ID};

#[derive(InputObject)]
pub struct CreateListItemInput {
    #[graphql(default = 0, validator(minimum = 0))]
    pub quantity: i32,
    #[graphql(default = false)]
    pub completed: bool,
    pub list_id: ID,
    pub item_id: ID,
}

/// Only the provided fields change.
#[derive(InputObject)]
pub struct UpdateListItemInput {
    pub id: ID,
    #[graphql(validator(minimum = 0))]
    pub quantity: Option<i32>,
    pub completed: Option<bool>,
    pub list_id: Option<ID>,
    pub item_id: Option<ID>,
}
