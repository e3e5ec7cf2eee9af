//! Permission derivation
//!
//! [`derive_permissions`] maps an optional role to a [`PermissionSet`]. It is
//! pure and total: an absent or unrecognized role yields an all-false set.

use serde::{Deserialize, Serialize};
use shared::{Role, RoleClaim, UserProfile};

use crate::capability::Capability;

/// Capability flags derived from a role
///
/// Recomputed on every call; nothing here is cached or persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_view_assets: bool,
    pub can_create_assets: bool,
    pub can_edit_assets: bool,
    pub can_delete_assets: bool,
    pub can_manage_reservations: bool,
    pub can_view_all_reservations: bool,
    pub can_manage_maintenance: bool,
    pub can_view_audit_logs: bool,
    pub can_create_notifications: bool,

    /// Role is exactly ICT Admin
    pub is_admin: bool,
    /// Role is exactly Facilitair Medewerker
    pub is_facilitair: bool,
    /// Role is exactly Gebruiker
    pub is_user: bool,
}

impl PermissionSet {
    /// The all-false set used for absent and unrecognized roles
    pub fn none() -> Self {
        Self::default()
    }

    /// Derive the set for a recognized role, or deny everything
    pub fn for_role(role: Option<Role>) -> Self {
        let Some(role) = role else {
            return Self::none();
        };

        let has = |capability: Capability| capability.is_granted_to(role);

        Self {
            can_view_assets: has(Capability::ViewAssets),
            can_create_assets: has(Capability::CreateAssets),
            can_edit_assets: has(Capability::EditAssets),
            can_delete_assets: has(Capability::DeleteAssets),
            can_manage_reservations: has(Capability::ManageReservations),
            can_view_all_reservations: has(Capability::ViewAllReservations),
            can_manage_maintenance: has(Capability::ManageMaintenance),
            can_view_audit_logs: has(Capability::ViewAuditLogs),
            can_create_notifications: has(Capability::CreateNotifications),
            is_admin: role == Role::IctAdmin,
            is_facilitair: role == Role::FacilitairMedewerker,
            is_user: role == Role::Gebruiker,
        }
    }

    /// Derive the set for a signed-in user, or deny everything when absent
    pub fn for_profile(profile: Option<&UserProfile>) -> Self {
        derive_permissions(profile.map(|p| &p.role))
    }

    /// Check a single capability
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewAssets => self.can_view_assets,
            Capability::CreateAssets => self.can_create_assets,
            Capability::EditAssets => self.can_edit_assets,
            Capability::DeleteAssets => self.can_delete_assets,
            Capability::ManageReservations => self.can_manage_reservations,
            Capability::ViewAllReservations => self.can_view_all_reservations,
            Capability::ManageMaintenance => self.can_manage_maintenance,
            Capability::ViewAuditLogs => self.can_view_audit_logs,
            Capability::CreateNotifications => self.can_create_notifications,
        }
    }

    /// Capabilities that are granted, in table order
    pub fn granted(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|c| self.allows(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.granted().is_empty()
    }
}

/// Derive the permission set for a role claim
///
/// `None` means nobody is signed in. Unrecognized role strings are denied
/// everything.
pub fn derive_permissions(role: Option<&RoleClaim>) -> PermissionSet {
    match role {
        Some(RoleClaim::Known(role)) => {
            let permissions = PermissionSet::for_role(Some(*role));
            tracing::debug!(
                role = %role,
                granted = permissions.granted().len(),
                "derived permissions"
            );
            permissions
        }
        Some(RoleClaim::Unrecognized(raw)) => {
            tracing::warn!(role = %raw, "unrecognized role, denying all capabilities");
            PermissionSet::none()
        }
        None => PermissionSet::none(),
    }
}
