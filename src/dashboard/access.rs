// Cosmetic role gating. Nothing here is a security boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Nurse,
    Doctor,
    Technician,
    #[serde(rename = "Family Member")]
    FamilyMember,
}

impl Role {
    pub fn can_access_task_panel(&self) -> bool {
        matches!(self, Role::Nurse | Role::Doctor | Role::Technician)
    }

    pub fn can_view_inventory(&self) -> bool {
        matches!(self, Role::Nurse | Role::Technician)
    }

    pub fn can_manage_routes(&self) -> bool {
        matches!(self, Role::Technician)
    }

    /// Family members get the companion view instead of the dashboard
    pub fn uses_companion_view(&self) -> bool {
        matches!(self, Role::FamilyMember)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Nurse => "Nurse",
            Role::Doctor => "Doctor",
            Role::Technician => "Technician",
            Role::FamilyMember => "Family Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nurse" => Ok(Role::Nurse),
            "doctor" => Ok(Role::Doctor),
            "technician" => Ok(Role::Technician),
            "family member" | "family_member" | "family" => Ok(Role::FamilyMember),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Dashboard views selectable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    #[default]
    Delivery,
    Task,
    Voice,
    Inventory,
    HospitalLayout,
    RobotFleet,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Delivery,
        Section::Task,
        Section::Voice,
        Section::Inventory,
        Section::HospitalLayout,
        Section::RobotFleet,
    ];

    /// Whether the sidebar entry is enabled for `role`
    pub fn is_enabled_for(&self, role: Role) -> bool {
        match self {
            Section::Task => role.can_access_task_panel(),
            Section::Inventory => role.can_view_inventory(),
            _ => true,
        }
    }
}
