use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::server::middleware::spawn_limiter_housekeeping;
use crate::server::state::AppState;

pub mod constants;
pub mod extract;
pub mod middleware;
pub mod resources;
pub mod router;
pub mod state;
pub mod users;

pub async fn run_all(config: &AppConfig) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState::try_init(config).await?);
    if let Some(limiter) = app_state.rate_limiter.clone() {
        spawn_limiter_housekeeping(limiter);
    }
    let served = router::serve(app_state.clone()).await;
    info!("closing database connection pool");
    app_state.db_connection.close().await;
    served
}
