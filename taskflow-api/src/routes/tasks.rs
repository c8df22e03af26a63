/// Task endpoints
///
/// # Endpoints
///
/// - `GET /api/members/:member_id/tasks` - List tasks of a member
/// - `POST /api/members/:member_id/tasks` - Create a task under a member
/// - `PUT /api/tasks/:task_id` - Full-record replace of a task
/// - `DELETE /api/tasks/:task_id` - Delete a task
///
/// Every operation is scoped by the user→group→member→task chain. The PUT
/// is a full replace, not a patch: omitted fields become nulls/false, so
/// callers must resend the complete task state each time.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{DeletedResponse, UpdatedResponse},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use taskflow_shared::{
    auth::middleware::AuthUser,
    models::task::{CreateTask, Task, UpdateTask},
};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional due date (YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
}

/// Update task request
///
/// Omitted fields are explicit nulls/false, not "unchanged".
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// New description (omitting clears it)
    pub description: Option<String>,

    /// New completion flag (omitting resets it to false)
    #[serde(default)]
    pub completed: bool,

    /// New due date (omitting clears it)
    pub due_date: Option<NaiveDate>,
}

/// Lists the tasks of a member reachable through the caller's chain
///
/// An unowned or nonexistent member yields an empty array.
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(member_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_for_member(&state.db, member_id, user.user_id).await?;

    Ok(Json(tasks))
}

/// Creates a task under a member reachable through the caller's chain
///
/// New tasks start with `completed = false`. The ownership join and the
/// insert are one atomic statement.
///
/// # Errors
///
/// - `400 Bad Request`: Title is empty
/// - `403 Forbidden`: Member is not reachable through an owned group
pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(member_id): Path<i64>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let task = Task::create_for_member(
        &state.db,
        member_id,
        user.user_id,
        CreateTask {
            title: req.title,
            description: req.description,
            due_date: req.due_date,
        },
    )
    .await?
    .ok_or(ApiError::AccessDenied)?;

    Ok(Json(task))
}

/// Replaces a task's fields, scoped by the ownership chain
///
/// Returns `{"updated": 0}` when the task does not exist or is not
/// reachable through the caller's chain.
///
/// # Errors
///
/// - `400 Bad Request`: Title is empty
pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(task_id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<UpdatedResponse>> {
    req.validate()?;

    let updated = Task::update_owned(
        &state.db,
        task_id,
        user.user_id,
        UpdateTask {
            title: req.title,
            description: req.description,
            completed: req.completed,
            due_date: req.due_date,
        },
    )
    .await?;

    Ok(Json(UpdatedResponse { updated }))
}

/// Deletes a task, scoped by the ownership chain
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = Task::delete_owned(&state.db, task_id, user.user_id).await?;

    Ok(Json(DeletedResponse { deleted }))
}
