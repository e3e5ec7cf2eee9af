//! Capability table
//!
//! Every capability is granted by membership of the role in a fixed
//! allow-list. This table is the only place those lists are written down.

use serde::{Deserialize, Serialize};
use shared::Role;
use std::fmt;

/// A single named permission derived from a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "canViewAssets")]
    ViewAssets,
    #[serde(rename = "canCreateAssets")]
    CreateAssets,
    #[serde(rename = "canEditAssets")]
    EditAssets,
    #[serde(rename = "canDeleteAssets")]
    DeleteAssets,
    #[serde(rename = "canManageReservations")]
    ManageReservations,
    #[serde(rename = "canViewAllReservations")]
    ViewAllReservations,
    #[serde(rename = "canManageMaintenance")]
    ManageMaintenance,
    #[serde(rename = "canViewAuditLogs")]
    ViewAuditLogs,
    #[serde(rename = "canCreateNotifications")]
    CreateNotifications,
}

const STAFF: &[Role] = &[Role::IctAdmin, Role::FacilitairMedewerker];
const EVERYONE_WITH_ASSET_ACCESS: &[Role] =
    &[Role::IctAdmin, Role::FacilitairMedewerker, Role::Gebruiker];
const ICT_ONLY: &[Role] = &[Role::IctAdmin];

impl Capability {
    /// Roles that hold this capability
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::ViewAssets => EVERYONE_WITH_ASSET_ACCESS,
            Capability::CreateAssets
            | Capability::EditAssets
            | Capability::DeleteAssets
            | Capability::ManageReservations
            | Capability::ViewAllReservations
            | Capability::ManageMaintenance
            | Capability::CreateNotifications => STAFF,
            Capability::ViewAuditLogs => ICT_ONLY,
        }
    }

    pub fn is_granted_to(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Flag name as used by the web client (e.g. `canViewAssets`)
    pub fn name(&self) -> &'static str {
        match self {
            Capability::ViewAssets => "canViewAssets",
            Capability::CreateAssets => "canCreateAssets",
            Capability::EditAssets => "canEditAssets",
            Capability::DeleteAssets => "canDeleteAssets",
            Capability::ManageReservations => "canManageReservations",
            Capability::ViewAllReservations => "canViewAllReservations",
            Capability::ManageMaintenance => "canManageMaintenance",
            Capability::ViewAuditLogs => "canViewAuditLogs",
            Capability::CreateNotifications => "canCreateNotifications",
        }
    }

    pub fn from_name(name: &str) -> Option<Capability> {
        Capability::all().iter().copied().find(|c| c.name() == name)
    }

    pub fn all() -> &'static [Capability] {
        &[
            Capability::ViewAssets,
            Capability::CreateAssets,
            Capability::EditAssets,
            Capability::DeleteAssets,
            Capability::ManageReservations,
            Capability::ViewAllReservations,
            Capability::ManageMaintenance,
            Capability::ViewAuditLogs,
            Capability::CreateNotifications,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
