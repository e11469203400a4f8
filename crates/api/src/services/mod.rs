pub mod auth;
pub mod items;
pub mod list_items;
pub mod lists;
pub mod seed;
pub mod seed_data;
pub mod users;

pub use auth::AuthService;
pub use items::ItemsService;
pub use list_items::ListItemService;
pub use lists::ListsService;
pub use seed::SeedService;
pub use users::UsersService;

use uuid::Uuid;

use crate::error::AppError;

/// Parse a GraphQL `ID` into a UUID, naming the entity on failure.
pub fn parse_id(id: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest(format!("Invalid {entity} ID: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_uuids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "item").unwrap(), id);
    }

    #[test]
    fn parse_id_rejects_garbage_as_bad_request() {
        let err = parse_id("42", "item").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Invalid item ID: 42"));
    }
}
