mod resolvers;
pub mod types;

pub use resolvers::{ItemMutation, ItemQuery};
