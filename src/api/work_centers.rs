//! Work center endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::work_center::WorkCenter, rbac::Permission};

use super::AuthenticatedUser;

/// List all work centers
#[utoipa::path(
    get,
    path = "/work-centers",
    tag = "work_centers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Work center list", body = Vec<WorkCenter>)
    )
)]
pub async fn list_work_centers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<WorkCenter>>> {
    claims.require(Permission::ViewWorkCenters)?;
    let work_centers = state.services.repository.work_centers.list().await?;
    Ok(Json(work_centers))
}

/// Get a work center by ID
#[utoipa::path(
    get,
    path = "/work-centers/{id}",
    tag = "work_centers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Work center ID")),
    responses(
        (status = 200, description = "Work center details", body = WorkCenter),
        (status = 404, description = "Work center not found")
    )
)]
pub async fn get_work_center(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<WorkCenter>> {
    claims.require(Permission::ViewWorkCenters)?;
    let work_center = state
        .services
        .repository
        .work_centers
        .get_by_id(id)
        .await?;
    Ok(Json(work_center))
}
