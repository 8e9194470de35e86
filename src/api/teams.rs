//! Teams endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::team::Team, rbac::Permission};

use super::AuthenticatedUser;

/// List all maintenance teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team list", body = Vec<Team>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Team>>> {
    claims.require(Permission::ViewTeams)?;
    let teams = state.services.repository.teams.list().await?;
    Ok(Json(teams))
}

/// Get a team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = Team),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Team>> {
    claims.require(Permission::ViewTeams)?;
    let team = state.services.repository.teams.get_by_id(id).await?;
    Ok(Json(team))
}
