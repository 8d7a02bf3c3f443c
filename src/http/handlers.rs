// src/http/handlers.rs
//! Thin adapters from HTTP requests to [`TodoStore`](crate::db::TodoStore) calls
//!
//! Store calls are synchronous SQLite work, so each runs on the blocking pool.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::Json;
use serde_json::{json, Value};

use super::{ApiError, AppState};
use crate::model::{DeleteResponse, NewTodo, TodoPatch, TodoRecord, UserId};

/// The authenticated caller; rejects with 401 before any body is read
pub struct Caller(pub UserId);

impl FromRequestParts<Arc<AppState>> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        state
            .identity
            .resolve(&parts.headers)
            .map(Caller)
            .ok_or(ApiError::Unauthorized)
    }
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /todos`
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
) -> Result<Json<Vec<TodoRecord>>, ApiError> {
    let store = Arc::clone(&state.store);
    let todos = tokio::task::spawn_blocking(move || store.list(&caller)).await??;
    Ok(Json(todos))
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<Json<TodoRecord>, ApiError> {
    let NewTodo { title } = body(payload)?;
    let store = Arc::clone(&state.store);
    let todo = tokio::task::spawn_blocking(move || store.create(&caller, &title)).await??;
    Ok(Json(todo))
}

/// `PUT /todos/{id}`
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<TodoRecord>, ApiError> {
    let patch = body(payload)?;
    let store = Arc::clone(&state.store);
    let todo = tokio::task::spawn_blocking(move || store.update(&caller, &id, &patch)).await??;
    Ok(Json(todo))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || store.delete(&caller, &id)).await??;
    Ok(Json(DeleteResponse { success: true }))
}
