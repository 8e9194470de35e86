//! Role-based access control
//!
//! A static permission table mapping each permission to the roles allowed to
//! exercise it. All predicates are pure and fail closed: a missing or
//! unknown role grants nothing.

use crate::models::enums::Role;

use Role::{Manager, Operator, Technician};

/// Named permissions from the core permissions matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    // Equipment
    ViewEquipment,
    ViewEquipmentDetails,
    ViewEquipmentCategory,
    CreateEquipment,
    EditEquipment,
    DeleteEquipment,
    ChangeEquipmentState,
    // Maintenance
    ViewMaintenance,
    CreateMaintenance,
    EditMaintenance,
    DeleteMaintenance,
    ChangeMaintenanceStatus,
    ChangeStatusToScrap,
    AssignTechnician,
    EditRequestPriority,
    AccessWorksheet,
    // Pages
    ViewDashboard,
    ViewCalendar,
    ViewTeams,
    EditTeams,
    ViewWorkCenters,
    EditWorkCenters,
    ViewReports,
    // Administration
    UserManagement,
    SystemSettings,
}

impl Permission {
    /// Roles allowed to exercise this permission
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Permission::ViewEquipment => &[Technician, Operator, Manager],
            Permission::ViewEquipmentDetails => &[Technician, Operator, Manager],
            Permission::ViewEquipmentCategory => &[Operator, Manager],
            Permission::CreateEquipment => &[Manager],
            Permission::EditEquipment => &[Manager],
            Permission::DeleteEquipment => &[Manager],
            Permission::ChangeEquipmentState => &[Manager],
            Permission::ViewMaintenance => &[Technician, Operator, Manager],
            Permission::CreateMaintenance => &[Operator, Manager],
            Permission::EditMaintenance => &[Technician, Operator, Manager],
            Permission::DeleteMaintenance => &[Manager],
            Permission::ChangeMaintenanceStatus => &[Technician, Operator, Manager],
            Permission::ChangeStatusToScrap => &[Manager],
            Permission::AssignTechnician => &[Manager],
            Permission::EditRequestPriority => &[Manager],
            Permission::AccessWorksheet => &[Technician, Operator, Manager],
            Permission::ViewDashboard => &[Technician, Operator, Manager],
            Permission::ViewCalendar => &[Technician, Operator, Manager],
            Permission::ViewTeams => &[Operator, Manager],
            Permission::EditTeams => &[Manager],
            Permission::ViewWorkCenters => &[Operator, Manager],
            Permission::EditWorkCenters => &[Manager],
            Permission::ViewReports => &[Manager],
            Permission::UserManagement => &[Manager],
            Permission::SystemSettings => &[Manager],
        }
    }
}

/// Check if the role matches exactly
pub fn has_role(role: Option<Role>, expected: Role) -> bool {
    role == Some(expected)
}

/// Check if the role is any of the expected ones
pub fn has_any_role(role: Option<Role>, expected: &[Role]) -> bool {
    role.map(|r| expected.contains(&r)).unwrap_or(false)
}

/// Check if the role sits at or above the given level in the hierarchy
pub fn has_minimum_role(role: Option<Role>, minimum: Role) -> bool {
    role.map(|r| r.level() >= minimum.level()).unwrap_or(false)
}

/// Check if the role carries the given permission
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    has_any_role(role, permission.allowed_roles())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PERMISSIONS: &[Permission] = &[
        Permission::ViewEquipment,
        Permission::ViewEquipmentDetails,
        Permission::ViewEquipmentCategory,
        Permission::CreateEquipment,
        Permission::EditEquipment,
        Permission::DeleteEquipment,
        Permission::ChangeEquipmentState,
        Permission::ViewMaintenance,
        Permission::CreateMaintenance,
        Permission::EditMaintenance,
        Permission::DeleteMaintenance,
        Permission::ChangeMaintenanceStatus,
        Permission::ChangeStatusToScrap,
        Permission::AssignTechnician,
        Permission::EditRequestPriority,
        Permission::AccessWorksheet,
        Permission::ViewDashboard,
        Permission::ViewCalendar,
        Permission::ViewTeams,
        Permission::EditTeams,
        Permission::ViewWorkCenters,
        Permission::EditWorkCenters,
        Permission::ViewReports,
        Permission::UserManagement,
        Permission::SystemSettings,
    ];

    #[test]
    fn missing_role_has_no_permissions() {
        for &p in ALL_PERMISSIONS {
            assert!(!has_permission(None, p), "{:?} granted without a role", p);
        }
    }

    #[test]
    fn manager_holds_every_permission() {
        for &p in ALL_PERMISSIONS {
            assert!(has_permission(Some(Role::Manager), p), "{:?} denied to manager", p);
        }
    }

    #[test]
    fn technician_cannot_create_maintenance_or_scrap() {
        assert!(!has_permission(Some(Role::Technician), Permission::CreateMaintenance));
        assert!(!has_permission(Some(Role::Technician), Permission::ChangeStatusToScrap));
        assert!(has_permission(Some(Role::Technician), Permission::ChangeMaintenanceStatus));
    }

    #[test]
    fn operator_cannot_edit_equipment_or_scrap() {
        assert!(!has_permission(Some(Role::Operator), Permission::EditEquipment));
        assert!(!has_permission(Some(Role::Operator), Permission::ChangeEquipmentState));
        assert!(!has_permission(Some(Role::Operator), Permission::ChangeStatusToScrap));
        assert!(has_permission(Some(Role::Operator), Permission::CreateMaintenance));
    }

    #[test]
    fn role_predicates() {
        assert!(has_role(Some(Role::Manager), Role::Manager));
        assert!(!has_role(Some(Role::Operator), Role::Manager));
        assert!(!has_role(None, Role::Manager));

        assert!(has_any_role(Some(Role::Operator), &[Role::Operator, Role::Manager]));
        assert!(!has_any_role(None, &[Role::Operator, Role::Manager]));

        assert!(has_minimum_role(Some(Role::Manager), Role::Operator));
        assert!(has_minimum_role(Some(Role::Operator), Role::Operator));
        assert!(!has_minimum_role(Some(Role::Technician), Role::Operator));
        assert!(!has_minimum_role(None, Role::Technician));
    }
}
