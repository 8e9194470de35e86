//! Maintenance requests repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, RequestType, Stage},
        request::{CreateRequest, MaintenanceRequest, UpdateRequest},
    },
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List maintenance requests, optionally filtered by equipment
    pub async fn list(&self, equipment_id: Option<i32>) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = match equipment_id {
            Some(id) => {
                sqlx::query_as::<_, MaintenanceRequest>(
                    "SELECT * FROM maintenance_requests WHERE equipment_id = $1 ORDER BY created_date DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, MaintenanceRequest>(
                    "SELECT * FROM maintenance_requests ORDER BY created_date DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Get a maintenance request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Open requests for one piece of equipment
    pub async fn open_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT * FROM maintenance_requests
            WHERE equipment_id = $1
              AND stage NOT IN ($2, $3)
            ORDER BY created_date DESC
            "#,
        )
        .bind(equipment_id)
        .bind(Stage::Repaired)
        .bind(Stage::Scrap)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Requests in a given stage, ordered by scheduled date
    pub async fn by_stage(&self, stage: Stage) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE stage = $1 ORDER BY scheduled_date",
        )
        .bind(stage)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All open requests (stage not terminal)
    pub async fn open(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT * FROM maintenance_requests
            WHERE stage NOT IN ($1, $2)
            ORDER BY created_date DESC
            "#,
        )
        .bind(Stage::Repaired)
        .bind(Stage::Scrap)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All preventive requests, ordered by scheduled date (calendar feed)
    pub async fn preventive(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE type = $1 ORDER BY scheduled_date",
        )
        .bind(RequestType::Preventive)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Open requests whose scheduled date has passed. The date comparison
    /// happens at query time against the database clock, never cached.
    pub async fn overdue(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT * FROM maintenance_requests
            WHERE stage NOT IN ($1, $2)
              AND scheduled_date < CURRENT_DATE
            ORDER BY scheduled_date
            "#,
        )
        .bind(Stage::Repaired)
        .bind(Stage::Scrap)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count open requests
    pub async fn count_open(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM maintenance_requests WHERE stage NOT IN ($1, $2)",
        )
        .bind(Stage::Repaired)
        .bind(Stage::Scrap)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Count overdue requests
    pub async fn count_overdue(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE stage NOT IN ($1, $2)
              AND scheduled_date < CURRENT_DATE
            "#,
        )
        .bind(Stage::Repaired)
        .bind(Stage::Scrap)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Request counts grouped by maintenance team (through equipment)
    pub async fn counts_by_team(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT t.name, COUNT(mr.id)
            FROM teams t
            LEFT JOIN equipment e ON e.maintenance_team_id = t.id
            LEFT JOIN maintenance_requests mr ON mr.equipment_id = e.id
            GROUP BY t.id, t.name
            ORDER BY COUNT(mr.id) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Request counts grouped by equipment category (through equipment)
    pub async fn counts_by_category(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT ec.name, COUNT(mr.id)
            FROM equipment_categories ec
            LEFT JOIN equipment e ON e.category_id = ec.id
            LEFT JOIN maintenance_requests mr ON mr.equipment_id = e.id
            GROUP BY ec.id, ec.name
            ORDER BY COUNT(mr.id) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a maintenance request; created_date comes from the server clock
    pub async fn create(&self, data: &CreateRequest, stage: Stage) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (subject, type, equipment_id, work_center_id, scheduled_date, priority,
                 assignee, technician_id, description, stage, created_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, CURRENT_DATE)
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(data.request_type)
        .bind(data.equipment_id)
        .bind(data.work_center_id)
        .bind(data.scheduled_date)
        .bind(data.priority)
        .bind(&data.assignee)
        .bind(data.technician_id)
        .bind(&data.description)
        .bind(stage)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update. The SET list is built from the typed struct, so only
    /// known columns can ever appear in the statement.
    pub async fn update(&self, id: i32, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let mut sets: Vec<String> = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.subject, "subject");
        add_field!(data.request_type, "type");
        add_field!(data.scheduled_date, "scheduled_date");
        add_field!(data.duration, "duration");
        add_field!(data.stage, "stage");
        add_field!(data.priority, "priority");
        add_field!(data.assignee, "assignee");
        add_field!(data.technician_id, "technician_id");
        add_field!(data.description, "description");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE maintenance_requests SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, MaintenanceRequest>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.subject);
        bind_field!(data.request_type);
        bind_field!(data.scheduled_date);
        bind_field!(data.duration);
        bind_field!(data.stage);
        bind_field!(data.priority);
        bind_field!(data.assignee);
        bind_field!(data.technician_id);
        bind_field!(data.description);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Scrap a request and its targeted equipment in a single transaction.
    /// Either both writes land or neither does.
    pub async fn scrap(
        &self,
        request_id: i32,
        equipment_id: Option<i32>,
    ) -> AppResult<MaintenanceRequest> {
        let mut tx = self.pool.begin().await?;

        if let Some(eq_id) = equipment_id {
            let result = sqlx::query("UPDATE equipment SET status = $1 WHERE id = $2")
                .bind(EquipmentStatus::Scrap)
                .bind(eq_id)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                return Err(AppError::NotFound(format!("Equipment {} not found", eq_id)));
            }
        }

        let request = sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET stage = $1 WHERE id = $2 RETURNING *",
        )
        .bind(Stage::Scrap)
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", request_id)))?;

        tx.commit().await?;
        Ok(request)
    }
}
