//! Dashboard statistics service

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, repository::Repository};

/// Aggregate statistics for the dashboard page
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Number of non-scrapped equipment
    pub total_assets: i64,
    /// Open maintenance requests (stage not terminal)
    pub open_requests: i64,
    /// Open requests whose scheduled date has passed
    pub overdue_requests: i64,
    /// Equipment with health below the critical threshold
    pub critical_equipment: i64,
    /// Request counts per maintenance team, highest first
    #[schema(value_type = Object)]
    pub requests_by_team: IndexMap<String, i64>,
    /// Request counts per equipment category, highest first
    #[schema(value_type = Object)]
    pub requests_by_category: IndexMap<String, i64>,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Request counts per team as an ordered name -> count map
    pub async fn requests_by_team(&self) -> AppResult<IndexMap<String, i64>> {
        let rows = self.repository.requests.counts_by_team().await?;
        Ok(rows.into_iter().collect())
    }

    /// Request counts per category as an ordered name -> count map
    pub async fn requests_by_category(&self) -> AppResult<IndexMap<String, i64>> {
        let rows = self.repository.requests.counts_by_category().await?;
        Ok(rows.into_iter().collect())
    }

    /// Gather the full dashboard bundle
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let total_assets = self.repository.equipment.count_active().await?;
        let open_requests = self.repository.requests.count_open().await?;
        let overdue_requests = self.repository.requests.count_overdue().await?;
        let critical_equipment = self.repository.equipment.count_critical().await?;
        let requests_by_team = self.requests_by_team().await?;
        let requests_by_category = self.requests_by_category().await?;

        Ok(DashboardStats {
            total_assets,
            open_requests,
            overdue_requests,
            critical_equipment,
            requests_by_team,
            requests_by_category,
        })
    }
}
