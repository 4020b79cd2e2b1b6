use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;

use crate::error::RequestError;
use crate::models::identifier::{require_id, IdQuery};
use crate::models::user::{validate_user_name, NewUser, User, UserId, UserPayload};
use crate::models::Acknowledgement;
use crate::server::extract::OptionalJson;
use crate::server::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, RequestError> {
    let users = state.db_connection.list_users().await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<UserPayload>, RequestError>,
) -> Result<(StatusCode, Json<User>), RequestError> {
    let user = NewUser::from_payload(&payload)?;
    let user = state.db_connection.create_user(&user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Bound to both `PUT` and `PATCH`; either replaces the name.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    query: Option<Query<IdQuery>>,
    OptionalJson(payload): OptionalJson<UserPayload>,
) -> Result<Json<User>, RequestError> {
    let payload = payload.unwrap_or_default();
    let id: UserId = require_id(
        path.as_ref().map(|Path(id)| id.as_str()),
        query.as_ref().and_then(|Query(query)| query.id.as_deref()),
        payload.id.as_ref(),
    )?;
    let name = validate_user_name(payload.name.as_deref())?;
    state
        .db_connection
        .rename_user(id, &name)
        .await?
        .map(Json)
        .ok_or(RequestError::NotFound { entity: "user" })
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    path: Option<Path<String>>,
    query: Option<Query<IdQuery>>,
    OptionalJson(payload): OptionalJson<UserPayload>,
) -> Result<Json<Acknowledgement>, RequestError> {
    let payload = payload.unwrap_or_default();
    let id: UserId = require_id(
        path.as_ref().map(|Path(id)| id.as_str()),
        query.as_ref().and_then(|Query(query)| query.id.as_deref()),
        payload.id.as_ref(),
    )?;
    if !state.db_connection.delete_user(id).await? {
        return Err(RequestError::NotFound { entity: "user" });
    }
    Ok(Json(Acknowledgement::new(format!("user {id} deleted"))))
}
