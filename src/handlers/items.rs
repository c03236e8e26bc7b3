//! Item handlers: list, read, range, properties, create, delete-last.

use crate::error::AppError;
use crate::response::{json_ok, message_created, message_ok};
use crate::service::{MutationService, QueryService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(json_ok(QueryService::list(&state)?))
}

/// GET /api/items/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(json_ok(QueryService::read(&state, &id)?))
}

/// GET /api/items/:id1/:id2
pub async fn range(
    State(state): State<AppState>,
    Path((id1, id2)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    Ok(json_ok(QueryService::range(&state, &id1, &id2)?))
}

/// GET /api/properties
pub async fn properties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(json_ok(QueryService::properties(&state)?))
}

/// POST /api/items
///
/// A missing or non-JSON body is read as an empty object, so it fails the `name` check.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.map_or_else(|| Value::Object(Map::new()), |Json(v)| v);
    let fields = RequestValidator::body_to_record(body)?;
    let record = MutationService::add(&state, fields)?;
    Ok(message_created(MutationService::added_message(&record)))
}

/// DELETE /api/items
pub async fn delete_last(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let record = MutationService::delete_last(&state)?;
    Ok(message_ok(MutationService::deleted_message(&record)))
}
