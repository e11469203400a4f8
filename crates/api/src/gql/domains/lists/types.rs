use async_graphql::{InputObject, ID};

#[derive(InputObject)]
pub struct CreateListInput {
    #[graphql(validator(min_length = 1))]
    pub name: String,
}

#[derive(InputObject)]
pub struct UpdateListInput {
    pub id: ID,
    #[graphql(validator(min_length = 1))]
    pub name: Option<String>,
}
