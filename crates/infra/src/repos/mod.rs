pub mod items;
pub mod list_items;
pub mod lists;
pub mod users;

pub use items::{CreateItemData, ItemRepo, UpdateItemData};
pub use list_items::{CreateListItemData, ListItemRepo, UpdateListItemData};
pub use lists::{CreateListData, ListRepo, UpdateListData};
pub use users::{CreateUserData, UpdateUserData, UserRepo};
