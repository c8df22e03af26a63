/// Group endpoints
///
/// # Endpoints
///
/// - `GET /api/groups` - List the caller's groups
/// - `POST /api/groups` - Create a group
/// - `DELETE /api/groups/:group_id` - Delete an owned group
///
/// Groups are only ever visible to their owner. Deleting a group does NOT
/// delete its members or tasks; they remain as orphaned rows.

use crate::{app::AppState, error::ApiResult, routes::DeletedResponse};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use taskflow_shared::{
    auth::middleware::AuthUser,
    models::group::{CreateGroup, Group},
};
use validator::Validate;

/// Create group request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGroupRequest {
    /// Group name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Lists all groups owned by the caller
///
/// # Endpoint
///
/// ```text
/// GET /api/groups
/// Authorization: Bearer <token>
/// ```
pub async fn list_groups(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Group>>> {
    let groups = Group::list_by_owner(&state.db, user.user_id).await?;

    Ok(Json(groups))
}

/// Creates a group owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: Name is empty
pub async fn create_group(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateGroupRequest>,
) -> ApiResult<Json<Group>> {
    req.validate()?;

    let group = Group::create(
        &state.db,
        user.user_id,
        CreateGroup {
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    Ok(Json(group))
}

/// Deletes a group, but only if the caller owns it
///
/// Returns `{"deleted": 0}` when the group does not exist or belongs to
/// someone else; neither case is distinguished.
pub async fn delete_group(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(group_id): Path<i64>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = Group::delete_owned(&state.db, group_id, user.user_id).await?;

    Ok(Json(DeletedResponse { deleted }))
}
