use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;

use crate::error::RequestError;
use crate::models::identifier::require_id;
use crate::models::resource::{CreateResourcePayload, NewResource, Resource, ResourceId};
use crate::models::Acknowledgement;
use crate::server::state::AppState;

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Resource>>, RequestError> {
    let resources = state.db_connection.list_resources().await?;
    Ok(Json(resources))
}

pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateResourcePayload>, RequestError>,
) -> Result<(StatusCode, Json<Resource>), RequestError> {
    let resource = NewResource::from_payload(&payload)?;
    let resource = state.db_connection.create_resource(&resource).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

pub async fn delete_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, RequestError> {
    let id: ResourceId = require_id(Some(&id), None, None)?;
    if !state.db_connection.delete_resource(id).await? {
        return Err(RequestError::NotFound { entity: "resource" });
    }
    Ok(Json(Acknowledgement::new(format!("resource {id} deleted"))))
}
