// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod auth;
pub mod items;
pub mod list_items;
pub mod lists;
pub mod seed;
pub mod users;
