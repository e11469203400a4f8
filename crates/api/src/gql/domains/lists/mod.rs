mod resolvers;
pub mod types;

pub use resolvers::{ListMutation, ListQuery};
