//! Success envelopes.
//!
//! Single rows go out as `{"<key>": {...}}`, collections as
//! `{"<plural>": [...]}`, and writes carry a sibling `"message"`. Keys and
//! messages come from the [`Entity`] descriptor.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use prefab_core::entity::Entity;
use prefab_db::scope::SoftDelete;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// `201 {"message": ..., "<key>": value}`
pub fn created<T: Serialize>(entity: &Entity, value: &T) -> AppResult<Response> {
    let body = envelope(Some(entity.created), entity.key, value)?;
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// `200 {"message": ..., "<key>": value}`
pub fn updated<T: Serialize>(entity: &Entity, value: &T) -> AppResult<Response> {
    let body = envelope(Some(entity.updated), entity.key, value)?;
    Ok(Json(body).into_response())
}

/// `200 {"<key>": value}`
pub fn found<T: Serialize>(entity: &Entity, value: &T) -> AppResult<Response> {
    let body = envelope(None, entity.key, value)?;
    Ok(Json(body).into_response())
}

/// `200 {"<plural>": rows}`
pub fn listed<T: Serialize>(entity: &Entity, rows: &[T]) -> AppResult<Response> {
    let body = envelope(None, entity.plural, &rows)?;
    Ok(Json(body).into_response())
}

/// `200 {"message"}` for a fresh deletion; the entity's already-deleted or
/// not-found error otherwise.
pub fn deleted(entity: &Entity, outcome: SoftDelete) -> AppResult<Response> {
    match outcome {
        SoftDelete::Deleted => Ok(message(entity.deleted)),
        SoftDelete::AlreadyDeleted => Err(entity.already_deleted_error().into()),
        SoftDelete::NotFound => Err(entity.not_found_error().into()),
    }
}

/// `200 {"message": text}`
pub fn message(text: &str) -> Response {
    Json(serde_json::json!({ "message": text })).into_response()
}

fn envelope<T: Serialize>(message: Option<&str>, key: &str, value: &T) -> AppResult<Value> {
    let value = serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("serializing {key}: {e}")))?;
    let mut body = Map::new();
    if let Some(message) = message {
        body.insert("message".into(), Value::String(message.into()));
    }
    body.insert(key.into(), value);
    Ok(Value::Object(body))
}
