//! Maintenance request lifecycle service
//!
//! Stage transitions follow New -> In Progress -> Repaired | Scrap. Marking
//! a request Repaired requires a repair duration in the same call, and
//! scrapping an equipment-targeted request also scraps the equipment,
//! atomically with the stage write.

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{Role, Stage},
        request::{CreateRequest, MaintenanceRequest, UpdateRequest},
    },
    rbac::{self, Permission},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

/// Check that a stage transition is allowed for the given role and inputs
pub fn validate_stage_change(target: Stage, duration: Option<f64>, role: Role) -> AppResult<()> {
    if !rbac::has_permission(Some(role), Permission::ChangeMaintenanceStatus) {
        return Err(AppError::Authorization(format!(
            "Role '{}' may not change maintenance stages",
            role
        )));
    }
    if target == Stage::Scrap && !rbac::has_permission(Some(role), Permission::ChangeStatusToScrap)
    {
        return Err(AppError::Authorization(
            "Only managers can move a request to Scrap".to_string(),
        ));
    }
    if target == Stage::Repaired {
        match duration {
            None => {
                return Err(AppError::BusinessRule(
                    "A repair duration (hours) is required to mark a request as Repaired"
                        .to_string(),
                ))
            }
            Some(hours) if hours <= 0.0 => {
                return Err(AppError::BusinessRule(
                    "Repair duration must be a positive number of hours".to_string(),
                ))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List requests, optionally filtered by equipment
    pub async fn list(&self, equipment_id: Option<i32>) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list(equipment_id).await
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceRequest> {
        self.repository.requests.get_by_id(id).await
    }

    /// Requests for one piece of equipment
    pub async fn by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list(Some(equipment_id)).await
    }

    /// Open requests for one piece of equipment
    pub async fn open_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.open_by_equipment(equipment_id).await
    }

    /// Requests in a given stage
    pub async fn by_stage(&self, stage: Stage) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.by_stage(stage).await
    }

    /// All open requests
    pub async fn open(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.open().await
    }

    /// Preventive requests, ordered for the calendar view
    pub async fn preventive(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.preventive().await
    }

    /// Open requests whose scheduled date has passed
    pub async fn overdue(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.overdue().await
    }

    /// Create a maintenance request. The stage defaults to New; terminal
    /// stages can only be reached through an explicit transition.
    pub async fn create(&self, data: &CreateRequest) -> AppResult<MaintenanceRequest> {
        match (data.equipment_id, data.work_center_id) {
            (None, None) => {
                return Err(AppError::Validation(
                    "A request must target equipment or a work center".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "A request cannot target both equipment and a work center".to_string(),
                ))
            }
            (Some(equipment_id), None) => {
                self.repository.equipment.get_by_id(equipment_id).await?;
            }
            (None, Some(work_center_id)) => {
                self.repository.work_centers.get_by_id(work_center_id).await?;
            }
        }

        let stage = data.stage.unwrap_or(Stage::New);
        if !stage.is_open() {
            return Err(AppError::Validation(format!(
                "A request cannot be created directly in the {} stage",
                stage
            )));
        }

        self.repository.requests.create(data, stage).await
    }

    /// Partial update of a request. Stage changes are routed through the
    /// lifecycle rules; priority and technician assignment are manager-only.
    pub async fn update(
        &self,
        id: i32,
        mut data: UpdateRequest,
        role: Role,
    ) -> AppResult<MaintenanceRequest> {
        let existing = self.repository.requests.get_by_id(id).await?;

        if data.priority.is_some()
            && data.priority != Some(existing.priority)
            && !rbac::has_permission(Some(role), Permission::EditRequestPriority)
        {
            return Err(AppError::Authorization(
                "Only managers can change request priority".to_string(),
            ));
        }

        if data.technician_id.is_some()
            && data.technician_id != existing.technician_id
            && !rbac::has_permission(Some(role), Permission::AssignTechnician)
        {
            return Err(AppError::Authorization(
                "Only managers can assign a technician".to_string(),
            ));
        }

        let transition = data.stage.filter(|s| *s != existing.stage);
        if let Some(target) = transition {
            let duration = data.duration.or(existing.duration);
            validate_stage_change(target, duration, role)?;

            if target == Stage::Scrap {
                // Apply the remaining field changes first, then scrap the
                // request together with its equipment in one transaction.
                data.stage = None;
                self.repository.requests.update(id, &data).await?;
                let updated = self
                    .repository
                    .requests
                    .scrap(id, existing.equipment_id)
                    .await?;
                tracing::info!(
                    request_id = id,
                    equipment_id = ?existing.equipment_id,
                    "request scrapped"
                );
                return Ok(updated);
            }
        }

        self.repository.requests.update(id, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repaired_requires_duration() {
        let err = validate_stage_change(Stage::Repaired, None, Role::Manager).unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));

        assert!(validate_stage_change(Stage::Repaired, Some(2.5), Role::Manager).is_ok());
    }

    #[test]
    fn repaired_rejects_non_positive_duration() {
        let err = validate_stage_change(Stage::Repaired, Some(0.0), Role::Operator).unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));

        let err = validate_stage_change(Stage::Repaired, Some(-1.0), Role::Operator).unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
    }

    #[test]
    fn scrap_is_manager_only() {
        assert!(validate_stage_change(Stage::Scrap, None, Role::Manager).is_ok());

        let err = validate_stage_change(Stage::Scrap, None, Role::Operator).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));

        let err = validate_stage_change(Stage::Scrap, None, Role::Technician).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[test]
    fn every_role_may_move_between_open_stages() {
        for role in [Role::Technician, Role::Operator, Role::Manager] {
            assert!(validate_stage_change(Stage::InProgress, None, role).is_ok());
            assert!(validate_stage_change(Stage::New, None, role).is_ok());
        }
    }
}
