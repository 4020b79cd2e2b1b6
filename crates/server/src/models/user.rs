use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::server::constants::USER_NAME_LENGTH_LIMIT;

pub type UserId = i32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Body accepted by every `/users` write endpoint. `id` is only consulted when
/// neither the path nor the query string carries one.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserPayload {
    pub id: Option<Value>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn from_payload(payload: &UserPayload) -> Result<Self, ValidationError> {
        let name = validate_user_name(payload.name.as_deref())?;
        Ok(Self { name })
    }
}

/// Returns the trimmed name.
pub fn validate_user_name(name: Option<&str>) -> Result<String, ValidationError> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    if name.chars().count() > USER_NAME_LENGTH_LIMIT {
        return Err(ValidationError::TooLong {
            field: "name",
            limit: USER_NAME_LENGTH_LIMIT,
        });
    }
    Ok(name.to_string())
}
