//! Task management endpoint handlers.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::auth::{unauthorized, Credential};
use crate::models::Task;
use crate::state::AppState;
use crate::store::StoreError;
use crate::utils::http_helpers::HTTPError;
use crate::utils::validate::{required_non_empty, FieldPresence};

/// Registers task management routes. The trailing-slash form of the
/// collection path is a first-class alias.
pub fn routes() -> Router<AppState> {
    let collection = get(list_tasks)
        .post(create_task)
        .fallback(super::method_not_allowed);

    Router::new()
        .route("/tasks", collection.clone())
        .route("/tasks/", collection)
        .route(
            "/tasks/{id}",
            delete(delete_task).fallback(super::method_not_allowed),
        )
}

#[derive(Serialize)]
struct TaskListResponse {
    success: bool,
    data: Vec<Task>,
}

#[derive(Serialize)]
struct TaskMutationResponse {
    success: bool,
    message: &'static str,
    data: Task,
}

/// Maps store errors to appropriate HTTP responses.
fn map_store_error(e: StoreError) -> HTTPError {
    match e {
        StoreError::InvalidTitle => bad_request("Title is required"),
        StoreError::DuplicateId(_) => bad_request("Task ID already exists"),
        StoreError::NotFound(_) => {
            HTTPError::new(StatusCode::NOT_FOUND, "Not found", Some("Task not found"))
        }
        StoreError::Persistence(_) | StoreError::Corrupt(_) => {
            error!("Store error: {}", e);
            HTTPError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                Some("Failed to persist task list"),
            )
        }
    }
}

fn bad_request(message: &'static str) -> HTTPError {
    HTTPError::new(StatusCode::BAD_REQUEST, "Bad request", Some(message))
}

/// Lists all tasks in insertion order.
async fn list_tasks(
    _credential: Credential,
    State(state): State<AppState>,
) -> Result<Json<TaskListResponse>, HTTPError> {
    let tasks = state.store.list().await.map_err(map_store_error)?;
    Ok(Json(TaskListResponse {
        success: true,
        data: tasks,
    }))
}

/// Creates a new task from a caller-supplied id and title.
///
/// The body is parsed leniently: malformed JSON is treated as an empty
/// body, so every required field reports as missing.
async fn create_task(
    _credential: Credential,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskMutationResponse>), HTTPError> {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let title = match required_non_empty(&body, "title") {
        FieldPresence::Valid(value) => value.as_str(),
        _ => None,
    }
    .ok_or_else(|| bad_request("Title is required"))?
    .to_string();

    let id = match required_non_empty(&body, "id") {
        FieldPresence::Valid(value) => value.as_u64(),
        _ => None,
    }
    .ok_or_else(|| bad_request("ID is required"))?;

    let completed = body
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let task = state
        .store
        .create(id, title, completed)
        .await
        .map_err(map_store_error)?;

    Ok((
        StatusCode::CREATED,
        Json(TaskMutationResponse {
            success: true,
            message: "Task created successfully",
            data: task,
        }),
    ))
}

/// Deletes a task by id.
///
/// The id segment must be one or more digits to count as a task route
/// at all; any other shape is an unknown endpoint, decided before
/// authentication just like the rest of the route table.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<TaskMutationResponse>, HTTPError> {
    let id = parse_task_id(&id).ok_or_else(|| {
        HTTPError::new(StatusCode::NOT_FOUND, "Endpoint not found", None::<&str>)
    })?;

    if state.auth.authenticate(&headers).is_none() {
        return Err(unauthorized());
    }

    let task = state.store.delete(id).await.map_err(map_store_error)?;
    Ok(Json(TaskMutationResponse {
        success: true,
        message: "Task deleted",
        data: task,
    }))
}

fn parse_task_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
