//! Maintenance request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{Priority, RequestType, Stage};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub request_type: RequestType,
    /// Target equipment; exclusive with `work_center_id`
    pub equipment_id: Option<i32>,
    /// Target work center; exclusive with `equipment_id`
    pub work_center_id: Option<i32>,
    pub scheduled_date: NaiveDate,
    /// Repair duration in hours, collected when the request is marked Repaired
    pub duration: Option<f64>,
    pub stage: Stage,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub technician_id: Option<i32>,
    pub created_date: NaiveDate,
    pub description: Option<String>,
}

/// Create maintenance request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub equipment_id: Option<i32>,
    pub work_center_id: Option<i32>,
    pub scheduled_date: NaiveDate,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub technician_id: Option<i32>,
    pub description: Option<String>,
    /// Initial stage; defaults to New
    pub stage: Option<Stage>,
}

/// Partial update payload. Absent fields are left unchanged; only the
/// columns named here can ever be touched by an update.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub subject: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub scheduled_date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub stage: Option<Stage>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub technician_id: Option<i32>,
    pub description: Option<String>,
}
