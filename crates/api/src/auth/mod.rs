pub mod config;
pub mod jwt;
pub mod password;
pub mod permissions;

pub use config::AuthConfig;
pub use jwt::{Claims, InvalidToken, JwtService};
pub use password::PasswordService;
