//! Equipment repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{CreateEquipment, Equipment},
    },
};

/// Health percentage below which equipment counts as critical
pub const CRITICAL_HEALTH_THRESHOLD: i16 = 30;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment
                (name, serial_number, purchase_date, warranty_info, location, department,
                 assigned_employee, maintenance_team_id, category_id, status, health)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(data.purchase_date)
        .bind(&data.warranty_info)
        .bind(&data.location)
        .bind(&data.department)
        .bind(&data.assigned_employee)
        .bind(data.maintenance_team_id)
        .bind(data.category_id)
        .bind(EquipmentStatus::Active)
        .bind(data.health)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment status
    pub async fn set_status(&self, id: i32, status: EquipmentStatus) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Count non-scrapped equipment (the "total assets" figure)
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE status != $1")
                .bind(EquipmentStatus::Scrap)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// List critical equipment (health below threshold, not scrapped)
    pub async fn list_critical(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment WHERE health < $1 AND status != $2 ORDER BY health",
        )
        .bind(CRITICAL_HEALTH_THRESHOLD)
        .bind(EquipmentStatus::Scrap)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count critical equipment
    pub async fn count_critical(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM equipment WHERE health < $1 AND status != $2",
        )
        .bind(CRITICAL_HEALTH_THRESHOLD)
        .bind(EquipmentStatus::Scrap)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
