//! Equipment category endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::category::EquipmentCategory, rbac::Permission};

use super::AuthenticatedUser;

/// List all equipment categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category list", body = Vec<EquipmentCategory>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EquipmentCategory>>> {
    claims.require(Permission::ViewEquipmentCategory)?;
    let categories = state.services.repository.categories.list().await?;
    Ok(Json(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = EquipmentCategory),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentCategory>> {
    claims.require(Permission::ViewEquipmentCategory)?;
    let category = state.services.repository.categories.get_by_id(id).await?;
    Ok(Json(category))
}
