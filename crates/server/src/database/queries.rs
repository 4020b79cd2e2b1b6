use sqlx::{Error as SqlxError, PgExecutor};
use tracing::instrument;

use crate::database::connection::DbConnection;
use crate::models::resource::Resource;
use crate::models::user::User;

impl DbConnection {
    pub async fn list_users(&self) -> Result<Vec<User>, SqlxError> {
        list_users(self.pool()).await
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>, SqlxError> {
        list_resources(self.pool()).await
    }

    pub async fn ping(&self) -> Result<(), SqlxError> {
        ping(self.pool()).await
    }
}

#[instrument(skip_all)]
pub async fn list_users<'a, E: PgExecutor<'a>>(executor: E) -> Result<Vec<User>, SqlxError> {
    sqlx::query_as("SELECT id, name FROM users ORDER BY id DESC;")
        .fetch_all(executor)
        .await
}

#[instrument(skip_all)]
pub async fn list_resources<'a, E: PgExecutor<'a>>(
    executor: E,
) -> Result<Vec<Resource>, SqlxError> {
    sqlx::query_as(
        "
    SELECT
        id, title, url, description, \"type\", platform, created_at
    FROM
        resources
    ORDER BY
        created_at DESC, id DESC;
    ",
    )
    .fetch_all(executor)
    .await
}

pub async fn ping<'a, E: PgExecutor<'a>>(executor: E) -> Result<(), SqlxError> {
    sqlx::query("SELECT 1;").execute(executor).await?;
    Ok(())
}
