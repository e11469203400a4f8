use async_graphql::{InputObject, SimpleObject};

use crate::gql::types::User;

#[derive(SimpleObject, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(InputObject)]
pub struct SignupInput {
    #[graphql(validator(email))]
    pub email: String,
    #[graphql(validator(min_length = 1))]
    pub full_name: String,
    #[graphql(validator(min_length = 6))]
    pub password: String,
}

#[derive(InputObject)]
pub struct LoginInput {
    #[graphql(validator(email))]
    pub email: String,
    #[graphql(validator(min_length = 6))]
    pub password: String,
}
