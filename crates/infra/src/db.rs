use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

pub type Db = PgPool;

/// Connection settings for the Postgres pool.
///
/// `DATABASE_URL` wins when present; otherwise the URL is assembled from the
/// discrete `DB_*` variables.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let host = env::var("DB_HOST").context("DB_HOST or DATABASE_URL must be set")?;
                let port: u16 = env::var("DB_PORT")
                    .unwrap_or_else(|_| "5432".to_string())
                    .parse()
                    .context("DB_PORT must be a port number")?;
                let username = env::var("DB_USERNAME").context("DB_USERNAME must be set")?;
                let password = env::var("DB_PASSWORD").unwrap_or_default();
                let database = env::var("DB_NAME").context("DB_NAME must be set")?;
                build_url(&host, port, &username, &password, &database)
            }
        };

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            url,
            max_connections,
        })
    }

    pub async fn connect(&self) -> Result<Db> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Some(Duration::from_secs(600)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .connect(&self.url)
            .await
            .context("failed to connect to Postgres")?;
        Ok(pool)
    }
}

fn build_url(host: &str, port: u16, username: &str, password: &str, database: &str) -> String {
    if password.is_empty() {
        format!("postgres://{username}@{host}:{port}/{database}")
    } else {
        format!("postgres://{username}:{password}@{host}:{port}/{database}")
    }
}

#[cfg(test)]
mod tests {
    use super::build_url;

    #[test]
    fn url_includes_password_when_present() {
        assert_eq!(
            build_url("db", 5433, "shop", "secret", "shoplist"),
            "postgres://shop:secret@db:5433/shoplist"
        );
    }

    #[test]
    fn url_omits_empty_password() {
        assert_eq!(
            build_url("localhost", 5432, "postgres", "", "shoplist"),
            "postgres://postgres@localhost:5432/shoplist"
        );
    }
}
