mod resolvers;
pub mod types;

pub use resolvers::{ListItemMutation, ListItemQuery};
