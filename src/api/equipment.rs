//! Equipment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CountResponse, CreateEquipment, Equipment, UpdateEquipmentStatus},
    rbac::Permission,
};

use super::AuthenticatedUser;

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Equipment>>> {
    claims.require(Permission::ViewEquipment)?;
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Equipment>> {
    claims.require(Permission::ViewEquipmentDetails)?;
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 403, description = "Insufficient permissions")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    claims.require(Permission::CreateEquipment)?;
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// List equipment in critical health (below 30%, not scrapped)
#[utoipa::path(
    get,
    path = "/equipment/critical",
    tag = "equipment",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Critical equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_critical_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Equipment>>> {
    claims.require(Permission::ViewEquipment)?;
    let equipment = state.services.equipment.list_critical().await?;
    Ok(Json(equipment))
}

/// Count of non-scrapped equipment (the "total assets" figure)
#[utoipa::path(
    get,
    path = "/equipment/stats/total",
    tag = "equipment",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Total asset count", body = CountResponse)
    )
)]
pub async fn total_assets(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<CountResponse>> {
    claims.require(Permission::ViewDashboard)?;
    let count = state.services.equipment.total_assets().await?;
    Ok(Json(CountResponse { count }))
}

/// Change equipment status
#[utoipa::path(
    patch,
    path = "/equipment/{id}/status",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipmentStatus,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 403, description = "Insufficient permissions"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipmentStatus>,
) -> AppResult<Json<Equipment>> {
    claims.require(Permission::ChangeEquipmentState)?;
    let equipment = state.services.equipment.set_status(id, data.status).await?;
    Ok(Json(equipment))
}
