//! Teams repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::team::Team,
};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance teams
    pub async fn list(&self) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a team by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Team> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }
}
