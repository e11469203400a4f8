use std::str::FromStr;

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject, ID};
use infra::models::{ItemRow, ListItemRow, ListRow, UserRow};
use infra::pagination::LimitOffset;
use uuid::Uuid;

use crate::auth::permissions::require_self_or_admin;
use crate::error::AppError;
use crate::gql::error::AppResultExt;
use crate::gql::loaders::{ItemLoader, ListLoader, UserLoader};
use crate::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ValidRoles {
    #[graphql(name = "ADMIN")]
    Admin,
    #[graphql(name = "USER")]
    User,
    #[graphql(name = "SUPER_USER")]
    SuperUser,
}

impl ValidRoles {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidRoles::Admin => "admin",
            ValidRoles::User => "user",
            ValidRoles::SuperUser => "superUser",
        }
    }
}

impl FromStr for ValidRoles {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ValidRoles::Admin),
            "user" => Ok(ValidRoles::User),
            "superUser" => Ok(ValidRoles::SuperUser),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Page window from the `offset` / `limit` field arguments. The schema
/// already rejects `offset < 0` and `limit < 1`.
pub fn page(offset: i32, limit: i32) -> LimitOffset {
    LimitOffset::new(limit as i64, offset as i64)
}

fn count_to_int(count: i64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<ValidRoles>,
    pub is_active: bool,
    #[graphql(skip)]
    pub user_id: Uuid,
    #[graphql(skip)]
    pub last_update_by_id: Option<Uuid>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.into(),
            email: row.email,
            full_name: row.full_name,
            roles: row.roles.iter().filter_map(|r| r.parse().ok()).collect(),
            is_active: row.is_active,
            user_id: row.id,
            last_update_by_id: row.last_update_by,
        }
    }
}

#[ComplexObject]
impl User {
    /// Who last changed this user, if anyone.
    async fn last_update_by(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(id) = self.last_update_by_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<UserLoader>>()?;
        Ok(loader.load_one(id).await?.map(User::from))
    }

    async fn item_count(&self, ctx: &Context<'_>) -> Result<i32> {
        require_self_or_admin(ctx, self.user_id).await?;
        let state = ctx.data::<AppState>()?;
        let count = state.items().count_by_user(self.user_id).await.into_gql()?;
        Ok(count_to_int(count))
    }

    async fn items(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] offset: i32,
        #[graphql(default = 10, validator(minimum = 1))] limit: i32,
        search: Option<String>,
    ) -> Result<Vec<Item>> {
        require_self_or_admin(ctx, self.user_id).await?;
        let state = ctx.data::<AppState>()?;
        let rows = state
            .items()
            .find_all(self.user_id, page(offset, limit), search.as_deref())
            .await
            .into_gql()?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn list_count(&self, ctx: &Context<'_>) -> Result<i32> {
        require_self_or_admin(ctx, self.user_id).await?;
        let state = ctx.data::<AppState>()?;
        let count = state.lists().count_by_user(self.user_id).await.into_gql()?;
        Ok(count_to_int(count))
    }

    async fn lists(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] offset: i32,
        #[graphql(default = 10, validator(minimum = 1))] limit: i32,
        search: Option<String>,
    ) -> Result<Vec<List>> {
        require_self_or_admin(ctx, self.user_id).await?;
        let state = ctx.data::<AppState>()?;
        let rows = state
            .lists()
            .find_all(self.user_id, page(offset, limit), search.as_deref())
            .await
            .into_gql()?;
        Ok(rows.into_iter().map(List::from).collect())
    }
}

async fn load_user(ctx: &Context<'_>, id: Uuid) -> Result<User> {
    let loader = ctx.data::<DataLoader<UserLoader>>()?;
    loader
        .load_one(id)
        .await?
        .map(User::from)
        .ok_or_else(|| AppError::NotFound(format!("{id} not found")))
        .into_gql()
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Item {
    pub id: ID,
    pub name: String,
    pub quantity_units: Option<String>,
    #[graphql(skip)]
    pub owner_id: Uuid,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            quantity_units: row.quantity_units,
            owner_id: row.user_id,
        }
    }
}

#[ComplexObject]
impl Item {
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        load_user(ctx, self.owner_id).await
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct List {
    pub id: ID,
    pub name: String,
    #[graphql(skip)]
    pub row: ListRow,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name.clone(),
            row,
        }
    }
}

#[ComplexObject]
impl List {
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        load_user(ctx, self.row.user_id).await
    }

    async fn total_items(&self, ctx: &Context<'_>) -> Result<i32> {
        let state = ctx.data::<AppState>()?;
        let count = state.list_items().count_by_list(&self.row).await.into_gql()?;
        Ok(count_to_int(count))
    }

    /// Entries of this list; `search` matches the item name.
    async fn items(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 0, validator(minimum = 0))] offset: i32,
        #[graphql(default = 10, validator(minimum = 1))] limit: i32,
        search: Option<String>,
    ) -> Result<Vec<ListItem>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .list_items()
            .find_all(&self.row, page(offset, limit), search.as_deref())
            .await
            .into_gql()?;
        Ok(rows.into_iter().map(ListItem::from).collect())
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct ListItem {
    pub id: ID,
    pub quantity: i32,
    pub completed: bool,
    #[graphql(skip)]
    pub list_id: Uuid,
    #[graphql(skip)]
    pub item_id: Uuid,
}

impl From<ListItemRow> for ListItem {
    fn from(row: ListItemRow) -> Self {
        Self {
            id: row.id.into(),
            quantity: row.quantity,
            completed: row.completed,
            list_id: row.list_id,
            item_id: row.item_id,
        }
    }
}

#[ComplexObject]
impl ListItem {
    async fn list(&self, ctx: &Context<'_>) -> Result<List> {
        let loader = ctx.data::<DataLoader<ListLoader>>()?;
        loader
            .load_one(self.list_id)
            .await?
            .map(List::from)
            .ok_or_else(|| AppError::NotFound(format!("List with id: {} not found", self.list_id)))
            .into_gql()
    }

    async fn item(&self, ctx: &Context<'_>) -> Result<Item> {
        let loader = ctx.data::<DataLoader<ItemLoader>>()?;
        loader
            .load_one(self.item_id)
            .await?
            .map(Item::from)
            .ok_or_else(|| AppError::NotFound(format!("Item with id: {} not found", self.item_id)))
            .into_gql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_storage_names() {
        for role in [ValidRoles::Admin, ValidRoles::User, ValidRoles::SuperUser] {
            assert_eq!(role.as_str().parse::<ValidRoles>(), Ok(role));
        }
        assert!("root".parse::<ValidRoles>().is_err());
    }

    #[test]
    fn unknown_stored_roles_are_dropped() {
        let now = chrono::Utc::now();
        let row = UserRow {
            id: Uuid::new_v4(),
            email: "jane@shop.dev".into(),
            full_name: "Jane".into(),
            password_hash: "x".into(),
            roles: vec!["user".into(), "legacy".into()],
            is_active: true,
            last_update_by: None,
            created_at: now,
            updated_at: now,
        };
        let user = User::from(row);
        assert_eq!(user.roles, vec![ValidRoles::User]);
    }

    #[test]
    fn page_maps_offset_and_limit() {
        assert_eq!(page(0, 10), LimitOffset::default());
        assert_eq!(page(20, 5), LimitOffset::new(5, 20));
    }
}
