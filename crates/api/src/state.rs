use infra::db::Db;
use infra::repos::{ItemRepo, ListItemRepo, ListRepo, UserRepo};

use crate::auth::{JwtService, PasswordService};
use crate::config::AppConfig;
use crate::services::{
    AuthService, ItemsService, ListItemService, ListsService, SeedService, UsersService,
};

/// Shared per-process state. Services are wired here once, from the pool and
/// configuration, and handed to resolvers through the GraphQL context.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: AppConfig,
    jwt_service: JwtService,
    users: UsersService,
    items: ItemsService,
    lists: ListsService,
    list_items: ListItemService,
    seed: SeedService,
    auth: AuthService,
}

impl AppState {
    pub fn new(db: Db, config: AppConfig) -> Self {
        let jwt_service = JwtService::new(&config.auth);
        let passwords = PasswordService::new(config.auth.bcrypt_cost);

        let users = UsersService::new(UserRepo::new(db.clone()), passwords);
        let items = ItemsService::new(ItemRepo::new(db.clone()));
        let lists = ListsService::new(ListRepo::new(db.clone()));
        let list_items = ListItemService::new(
            ListItemRepo::new(db.clone()),
            ItemRepo::new(db.clone()),
            ListRepo::new(db.clone()),
        );
        let seed = SeedService::new(
            db.clone(),
            config.environment.is_production(),
            passwords,
        );
        let auth = AuthService::new(users.clone(), jwt_service.clone(), passwords);

        Self {
            db,
            config,
            jwt_service,
            users,
            items,
            lists,
            list_items,
            seed,
            auth,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn users(&self) -> &UsersService {
        &self.users
    }

    pub fn items(&self) -> &ItemsService {
        &self.items
    }

    pub fn lists(&self) -> &ListsService {
        &self.lists
    }

    pub fn list_items(&self) -> &ListItemService {
        &self.list_items
    }

    pub fn seed(&self) -> &SeedService {
        &self.seed
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
