use async_graphql::{InputObject, ID};

use crate::gql::types::ValidRoles;

#[derive(InputObject)]
pub struct UpdateUserInput {
    pub id: ID,
    #[graphql(validator(email))]
    pub email: Option<String>,
    #[graphql(validator(min_length = 1))]
    pub full_name: Option<String>,
    #[graphql(validator(min_length = 6))]
    pub password: Option<String>,
    pub roles: Option<Vec<ValidRoles>>,
    pub is_active: Option<bool>,
}
