use std::env;

use anyhow::Result;
use infra::db::DbConfig;

use crate::auth::AuthConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// `STATE=prod` marks production; anything else is treated as development.
    pub fn from_state(state: Option<&str>) -> Self {
        match state {
            Some("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub introspection: bool,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            environment: Environment::from_state(env::var("STATE").ok().as_deref()),
            port,
            allowed_origins,
            introspection: env::var("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(false),
            auth: AuthConfig::from_env()?,
        })
    }
}

/// Everything `main` needs before the pool exists.
pub fn load() -> Result<(AppConfig, DbConfig)> {
    Ok((AppConfig::from_env()?, DbConfig::from_env()?))
}
