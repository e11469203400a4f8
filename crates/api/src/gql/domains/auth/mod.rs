mod resolvers;
pub mod types;

pub use resolvers::{AuthMutation, AuthQuery};
