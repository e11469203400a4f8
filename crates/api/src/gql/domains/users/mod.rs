mod resolvers;
pub mod types;

pub use resolvers::{UserMutation, UserQuery};
