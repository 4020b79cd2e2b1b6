use sqlx::{Error as SqlxError, PgExecutor};
use tracing::{info, instrument};

use crate::database::connection::DbConnection;
use crate::models::resource::{NewResource, Resource, ResourceId};
use crate::models::user::{NewUser, User, UserId};

impl DbConnection {
    pub async fn create_user(&self, user: &NewUser) -> Result<User, SqlxError> {
        create_user(self.pool(), user).await
    }

    /// `None` when no user has the given id.
    pub async fn rename_user(&self, id: UserId, name: &str) -> Result<Option<User>, SqlxError> {
        rename_user(self.pool(), id, name).await
    }

    /// `false` when no user has the given id.
    pub async fn delete_user(&self, id: UserId) -> Result<bool, SqlxError> {
        delete_user(self.pool(), id).await
    }

    pub async fn create_resource(&self, resource: &NewResource) -> Result<Resource, SqlxError> {
        create_resource(self.pool(), resource).await
    }

    pub async fn delete_resource(&self, id: ResourceId) -> Result<bool, SqlxError> {
        delete_resource(self.pool(), id).await
    }
}

#[instrument(skip(executor))]
pub async fn create_user<'a, E: PgExecutor<'a>>(
    executor: E,
    user: &NewUser,
) -> Result<User, SqlxError> {
    let user: User = sqlx::query_as("INSERT INTO users (name) VALUES ($1) RETURNING id, name;")
        .bind(&user.name)
        .fetch_one(executor)
        .await?;
    info!("created user with id: {}", user.id);
    Ok(user)
}

#[instrument(skip(executor))]
pub async fn rename_user<'a, E: PgExecutor<'a>>(
    executor: E,
    id: UserId,
    name: &str,
) -> Result<Option<User>, SqlxError> {
    sqlx::query_as("UPDATE users SET name = $1 WHERE id = $2 RETURNING id, name;")
        .bind(name)
        .bind(id)
        .fetch_optional(executor)
        .await
}

#[instrument(skip(executor))]
pub async fn delete_user<'a, E: PgExecutor<'a>>(executor: E, id: UserId) -> Result<bool, SqlxError> {
    let deleted = sqlx::query("DELETE FROM users WHERE id = $1;")
        .bind(id)
        .execute(executor)
        .await?
        .rows_affected()
        > 0;
    if deleted {
        info!("deleted user with id: {id}");
    }
    Ok(deleted)
}

#[instrument(skip(executor))]
pub async fn create_resource<'a, E: PgExecutor<'a>>(
    executor: E,
    resource: &NewResource,
) -> Result<Resource, SqlxError> {
    let resource: Resource = sqlx::query_as(
        "
            INSERT INTO resources (title, url, description, \"type\", platform, created_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp)
            RETURNING id, title, url, description, \"type\", platform, created_at;
        ",
    )
    .bind(&resource.title)
    .bind(&resource.url)
    .bind(&resource.description)
    .bind(&resource.kind)
    .bind(&resource.platform)
    .fetch_one(executor)
    .await?;
    info!("created resource with id: {}", resource.id);
    Ok(resource)
}

#[instrument(skip(executor))]
pub async fn delete_resource<'a, E: PgExecutor<'a>>(
    executor: E,
    id: ResourceId,
) -> Result<bool, SqlxError> {
    let deleted = sqlx::query("DELETE FROM resources WHERE id = $1;")
        .bind(id)
        .execute(executor)
        .await?
        .rows_affected()
        > 0;
    if deleted {
        info!("deleted resource with id: {id}");
    }
    Ok(deleted)
}
