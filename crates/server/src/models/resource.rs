use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::server::constants::{
    DEFAULT_RESOURCE_PLATFORM, DEFAULT_RESOURCE_TYPE, RESOURCE_TITLE_LENGTH_LIMIT,
    RESOURCE_URL_LENGTH_LIMIT,
};

pub type ResourceId = i64;

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateResourcePayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub platform: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub url: String,
    pub description: String,
    pub kind: String,
    pub platform: String,
}

impl NewResource {
    pub fn from_payload(payload: &CreateResourcePayload) -> Result<Self, ValidationError> {
        let title = required(payload.title.as_deref(), "title", RESOURCE_TITLE_LENGTH_LIMIT)?;
        let url = required(payload.url.as_deref(), "url", RESOURCE_URL_LENGTH_LIMIT)?;
        Ok(Self {
            title,
            url,
            description: optional(payload.description.as_deref(), ""),
            kind: optional(payload.kind.as_deref(), DEFAULT_RESOURCE_TYPE),
            platform: optional(payload.platform.as_deref(), DEFAULT_RESOURCE_PLATFORM),
        })
    }
}

fn required(
    value: Option<&str>,
    field: &'static str,
    limit: usize,
) -> Result<String, ValidationError> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    if value.chars().count() > limit {
        return Err(ValidationError::TooLong { field, limit });
    }
    Ok(value.to_string())
}

// blank counts as absent
fn optional(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
