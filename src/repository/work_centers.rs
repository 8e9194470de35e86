//! Work centers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::work_center::WorkCenter,
};

#[derive(Clone)]
pub struct WorkCentersRepository {
    pool: Pool<Postgres>,
}

impl WorkCentersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all work centers
    pub async fn list(&self) -> AppResult<Vec<WorkCenter>> {
        let rows = sqlx::query_as::<_, WorkCenter>("SELECT * FROM work_centers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a work center by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<WorkCenter> {
        sqlx::query_as::<_, WorkCenter>("SELECT * FROM work_centers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Work center {} not found", id)))
    }
}
