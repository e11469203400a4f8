use async_graphql::{InputObject, MaybeUndefined, ID};

#[derive(InputObject)]
pub struct CreateItemInput {
    #[graphql(validator(min_length = 1))]
    pub name: String,
    pub quantity_units: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateItemInput {
    pub id: ID,
    #[graphql(validator(min_length = 1))]
    pub name: Option<String>,
    /// Omit to keep the current unit, pass `null` to clear it.
    pub quantity_units: MaybeUndefined<String>,
}
