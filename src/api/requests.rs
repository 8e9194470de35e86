//! Maintenance request endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::Stage,
        request::{CreateRequest, MaintenanceRequest, UpdateRequest},
    },
    rbac::Permission,
};

use super::AuthenticatedUser;

/// Query parameters for listing requests
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestsQuery {
    /// Filter by equipment ID
    pub equipment: Option<i32>,
}

/// List maintenance requests, optionally filtered by equipment
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(RequestsQuery),
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<RequestsQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let requests = state.services.maintenance.list(query.equipment).await?;
    Ok(Json(requests))
}

/// Get a maintenance request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceRequest>> {
    claims.require(Permission::ViewMaintenance)?;
    let request = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(request))
}

/// All requests for one piece of equipment
#[utoipa::path(
    get,
    path = "/requests/equipment/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn requests_by_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let requests = state.services.maintenance.by_equipment(id).await?;
    Ok(Json(requests))
}

/// Open requests for one piece of equipment
#[utoipa::path(
    get,
    path = "/requests/equipment/{id}/open",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Open request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn open_requests_by_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let requests = state.services.maintenance.open_by_equipment(id).await?;
    Ok(Json(requests))
}

/// Requests in a given stage (kanban column)
#[utoipa::path(
    get,
    path = "/requests/stage/{stage}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("stage" = String, Path, description = "Stage (New, In Progress, Repaired, Scrap)")),
    responses(
        (status = 200, description = "Request list", body = Vec<MaintenanceRequest>),
        (status = 400, description = "Unknown stage")
    )
)]
pub async fn requests_by_stage(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(stage): Path<String>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let stage: Stage = stage.parse().map_err(AppError::Validation)?;
    let requests = state.services.maintenance.by_stage(stage).await?;
    Ok(Json(requests))
}

/// All open requests
#[utoipa::path(
    get,
    path = "/requests/open",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Open request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn open_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let requests = state.services.maintenance.open().await?;
    Ok(Json(requests))
}

/// Preventive requests ordered by scheduled date (calendar feed)
#[utoipa::path(
    get,
    path = "/requests/preventive",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Preventive request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn preventive_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewCalendar)?;
    let requests = state.services.maintenance.preventive().await?;
    Ok(Json(requests))
}

/// Open requests whose scheduled date has passed
#[utoipa::path(
    get,
    path = "/requests/overdue",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Overdue request list", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn overdue_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require(Permission::ViewMaintenance)?;
    let requests = state.services.maintenance.overdue().await?;
    Ok(Json(requests))
}

/// Request counts grouped by maintenance team
#[utoipa::path(
    get,
    path = "/requests/stats/by-team",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts keyed by team name")
    )
)]
pub async fn stats_by_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<IndexMap<String, i64>>> {
    claims.require(Permission::ViewDashboard)?;
    let stats = state.services.stats.requests_by_team().await?;
    Ok(Json(stats))
}

/// Request counts grouped by equipment category
#[utoipa::path(
    get,
    path = "/requests/stats/by-category",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts keyed by category name")
    )
)]
pub async fn stats_by_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<IndexMap<String, i64>>> {
    claims.require(Permission::ViewDashboard)?;
    let stats = state.services.stats.requests_by_category().await?;
    Ok(Json(stats))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 403, description = "Insufficient permissions")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    claims.require(Permission::CreateMaintenance)?;
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let request = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Partially update a maintenance request. Stage changes go through the
/// lifecycle rules (duration on Repaired, manager-only Scrap).
#[utoipa::path(
    patch,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 403, description = "Insufficient permissions"),
        (status = 404, description = "Request not found"),
        (status = 422, description = "Lifecycle rule violation")
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    claims.require(Permission::EditMaintenance)?;
    let request = state
        .services
        .maintenance
        .update(id, data, claims.role)
        .await?;
    Ok(Json(request))
}
