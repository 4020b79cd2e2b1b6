use std::net::IpAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::Context;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use crate::config::AppConfig;
use crate::database::connection::DbConnection;

pub type ClientRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

pub struct AppState {
    pub config: AppConfig,
    pub db_connection: DbConnection,
    pub rate_limiter: Option<Arc<ClientRateLimiter>>,
}

impl AppState {
    pub async fn try_init(config: &AppConfig) -> anyhow::Result<Self> {
        let db_connection = DbConnection::connect(&config.database)
            .await
            .context("failed to connect to the database")?;
        Ok(Self::new(config, db_connection))
    }

    pub fn new(config: &AppConfig, db_connection: DbConnection) -> Self {
        let rate_limiter = NonZeroU32::new(config.server.rate_limit_per_minute)
            .map(|per_minute| Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute))));
        Self {
            config: config.clone(),
            db_connection,
            rate_limiter,
        }
    }
}
