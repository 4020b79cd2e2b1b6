use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Resolves an identifier from the path, the query string and the body, in that order.
///
/// The first source that carries a value wins, even when that value doesn't parse:
/// `/users/abc?id=5` resolves to `None` rather than falling through to `5`.
pub fn resolve_id<T: FromStr>(
    path: Option<&str>,
    query: Option<&str>,
    body: Option<&Value>,
) -> Option<T> {
    if let Some(raw) = path.or(query) {
        return parse_id(raw);
    }
    match body? {
        Value::String(raw) => parse_id(raw),
        Value::Number(number) => parse_id(&number.to_string()),
        _ => None,
    }
}

pub fn require_id<T: FromStr>(
    path: Option<&str>,
    query: Option<&str>,
    body: Option<&Value>,
) -> Result<T, ValidationError> {
    resolve_id(path, query, body).ok_or(ValidationError::MissingId)
}

fn parse_id<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}
