//! Work center model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Work center record (production line or station that can be the target of
/// a maintenance request instead of a piece of equipment)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkCenter {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[schema(value_type = Option<f64>)]
    pub cost_per_hour: Option<Decimal>,
    pub capacity: Option<i32>,
    pub oee_target: Option<i32>,
}
