use sqlx::{Error as SqlxError, Postgres, Transaction};
use tracing::instrument;

use crate::database::connection::DbConnection;

impl DbConnection {
    pub async fn init_schema(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        create_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }

    pub async fn drop_schema(&self) -> Result<(), SqlxError> {
        let mut transaction = self.pool().begin().await?;
        drop_all_tables(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }
}

#[instrument(skip_all)]
pub async fn create_all_tables(
    transaction: &mut Transaction<'_, Postgres>,
) -> Result<(), SqlxError> {
    sqlx::query(
        "
            CREATE TABLE users (
                id      int PRIMARY KEY GENERATED ALWAYS AS IDENTITY,
                name    VARCHAR(100) NOT NULL
            );
        ",
    )
    .execute(transaction.as_mut())
    .await?;
    sqlx::query(
        "
            CREATE TABLE resources (
                id              bigint PRIMARY KEY GENERATED ALWAYS AS IDENTITY,
                title           VARCHAR(255) NOT NULL,
                url             VARCHAR(2048) NOT NULL,
                description     TEXT NOT NULL DEFAULT '',
                \"type\"          TEXT NOT NULL DEFAULT 'Otro',
                platform        TEXT NOT NULL DEFAULT 'Otro',
                created_at      TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT current_timestamp
            );
        ",
    )
    .execute(transaction.as_mut())
    .await?;
    Ok(())
}

#[instrument(skip_all)]
pub async fn drop_all_tables(transaction: &mut Transaction<'_, Postgres>) -> Result<(), SqlxError> {
    let statements = [
        "DROP TABLE IF EXISTS resources;",
        "DROP TABLE IF EXISTS users;",
    ];
    for statement in &statements {
        sqlx::query(statement).execute(transaction.as_mut()).await?;
    }
    Ok(())
}
