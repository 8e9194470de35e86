//! Dashboard statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, rbac::Permission, services::stats::DashboardStats};

use super::AuthenticatedUser;

/// Aggregate statistics for the dashboard page
#[utoipa::path(
    get,
    path = "/stats/dashboard",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    claims.require(Permission::ViewDashboard)?;
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}
