//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentStatus;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub assigned_employee: Option<String>,
    pub maintenance_team_id: Option<i32>,
    pub category_id: Option<i32>,
    pub status: EquipmentStatus,
    /// Health percentage (0-100); below 30 the equipment counts as critical
    pub health: Option<i16>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub assigned_employee: Option<String>,
    pub maintenance_team_id: Option<i32>,
    pub category_id: Option<i32>,
    #[validate(range(min = 0, max = 100, message = "Health must be between 0 and 100"))]
    pub health: Option<i16>,
}

/// Equipment status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentStatus {
    pub status: EquipmentStatus,
}

/// Count response for equipment statistics
#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}
