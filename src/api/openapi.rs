//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, categories, equipment, health, requests, stats, teams, work_centers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance Tracking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Teams
        teams::list_teams,
        teams::get_team,
        // Categories
        categories::list_categories,
        categories::get_category,
        // Work centers
        work_centers::list_work_centers,
        work_centers::get_work_center,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::list_critical_equipment,
        equipment::total_assets,
        equipment::update_equipment_status,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::requests_by_equipment,
        requests::open_requests_by_equipment,
        requests::requests_by_stage,
        requests::open_requests,
        requests::preventive_requests,
        requests::overdue_requests,
        requests::stats_by_team,
        requests::stats_by_category,
        requests::create_request,
        requests::update_request,
        // Stats
        stats::dashboard,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            crate::models::user::UserInfo,
            // Enums
            crate::models::enums::Stage,
            crate::models::enums::RequestType,
            crate::models::enums::Priority,
            crate::models::enums::EquipmentStatus,
            crate::models::enums::Role,
            // Entities
            crate::models::team::Team,
            crate::models::category::EquipmentCategory,
            crate::models::work_center::WorkCenter,
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipmentStatus,
            crate::models::equipment::CountResponse,
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            // Stats
            crate::services::stats::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "teams", description = "Maintenance teams"),
        (name = "categories", description = "Equipment categories"),
        (name = "work_centers", description = "Work centers"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
