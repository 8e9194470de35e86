//! Equipment management service

use crate::{
    error::AppResult,
    models::{
        enums::EquipmentStatus,
        equipment::{CreateEquipment, Equipment},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        if let Some(team_id) = data.maintenance_team_id {
            self.repository.teams.get_by_id(team_id).await?;
        }
        if let Some(category_id) = data.category_id {
            self.repository.categories.get_by_id(category_id).await?;
        }
        self.repository.equipment.create(data).await
    }

    /// Change equipment status
    pub async fn set_status(&self, id: i32, status: EquipmentStatus) -> AppResult<Equipment> {
        self.repository.equipment.set_status(id, status).await
    }

    /// Count non-scrapped equipment
    pub async fn total_assets(&self) -> AppResult<i64> {
        self.repository.equipment.count_active().await
    }

    /// List equipment in critical health
    pub async fn list_critical(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_critical().await
    }
}
