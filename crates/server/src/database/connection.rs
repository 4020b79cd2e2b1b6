use std::time::Duration;

use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use tracing::info;

#[derive(Clone, Debug, Args)]
pub struct DbConfig {
    /// Database server host.
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST")]
    pub host: String,
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(long = "db-user", env = "DB_USER")]
    pub username: String,
    #[arg(long = "db-pass", env = "DB_PASS", hide_env_values = true)]
    pub password: String,
    #[arg(long = "db-name", env = "DB_NAME")]
    pub dbname: String,
    /// Upper bound of pooled connections; excess requests queue for a free one.
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = DbConfig::MAX_CONN_FALLBACK)]
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection before failing.
    #[arg(long = "db-acquire-timeout-secs", env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = DbConfig::ACQUIRE_TIMEOUT_FALLBACK)]
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    #[cfg(test)]
    const ADDRESS_FALLBACK: &'static str = "localhost";
    #[cfg(test)]
    const PORT_FALLBACK: u16 = 5432;
    const MAX_CONN_FALLBACK: u32 = 10;
    const ACQUIRE_TIMEOUT_FALLBACK: u64 = 5;

    #[cfg(test)]
    pub fn development(dbname: &str, username: &str, password: &str) -> Self {
        Self {
            host: Self::ADDRESS_FALLBACK.to_string(),
            port: Self::PORT_FALLBACK,
            username: username.to_string(),
            password: password.to_string(),
            dbname: dbname.to_string(),
            max_connections: Self::MAX_CONN_FALLBACK,
            acquire_timeout_secs: Self::ACQUIRE_TIMEOUT_FALLBACK,
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.dbname)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}

pub struct DbConnection {
    pool: PgPool,
}

impl DbConnection {
    pub async fn connect(config: &DbConfig) -> Result<Self, SqlxError> {
        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await?;
        info!(
            "connected to database {} at {}:{} (max {} connections)",
            config.dbname, config.host, config.port, config.max_connections
        );
        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection; the first query connects.
    #[cfg(test)]
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let pool = config
            .pool_options()
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Waits for checked-out connections to be returned, then closes them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database connection pool closed");
    }
}
