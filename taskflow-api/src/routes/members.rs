/// Member endpoints
///
/// # Endpoints
///
/// - `GET /api/groups/:group_id/members` - List members of an owned group
/// - `POST /api/groups/:group_id/members` - Create a member in an owned group
/// - `DELETE /api/members/:member_id` - Delete a member of an owned group
///
/// Members carry no owner column; every operation re-joins through the
/// owning group. Listing an unowned or nonexistent group yields an empty
/// array, indistinguishable from a group with no members. Creation under an
/// unowned group is the one place that reports `403 Access denied`.

use crate::{app::AppState, error::{ApiError, ApiResult}, routes::DeletedResponse};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use taskflow_shared::{auth::middleware::AuthUser, models::member::Member};
use validator::Validate;

/// Create member request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    /// Member name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Lists the members of a group the caller owns
pub async fn list_members(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(group_id): Path<i64>,
) -> ApiResult<Json<Vec<Member>>> {
    let members = Member::list_in_group(&state.db, group_id, user.user_id).await?;

    Ok(Json(members))
}

/// Creates a member inside a group the caller owns
///
/// The ownership check and insert are one atomic statement.
///
/// # Errors
///
/// - `400 Bad Request`: Name is empty
/// - `403 Forbidden`: Group does not exist or is not owned by the caller
pub async fn create_member(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(group_id): Path<i64>,
    Json(req): Json<CreateMemberRequest>,
) -> ApiResult<Json<Member>> {
    req.validate()?;

    let member = Member::create_in_group(&state.db, group_id, user.user_id, req.name)
        .await?
        .ok_or(ApiError::AccessDenied)?;

    Ok(Json(member))
}

/// Deletes a member, but only if its group is owned by the caller
///
/// Tasks under the member are NOT deleted; they remain as orphaned rows.
pub async fn delete_member(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(member_id): Path<i64>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = Member::delete_owned(&state.db, member_id, user.user_id).await?;

    Ok(Json(DeletedResponse { deleted }))
}
