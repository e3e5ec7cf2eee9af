//! Role-aware view composition
//!
//! Every screen's visibility rules live in [`VIEW_RULES`], a table mapping
//! each control to the capability it requires. Views never compare roles
//! directly; they ask this module with a derived [`PermissionSet`].

use serde::{Deserialize, Serialize};
use shared::{AssetDeskError, ControlNotAccessibleError};
use std::fmt;
use std::str::FromStr;

use crate::capability::Capability;
use crate::permissions::PermissionSet;

/// Top-level screens of the asset desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Header and navigation bar, present on every page
    Header,
    Assets,
    Reservations,
    Maintenance,
    Notifications,
    AuditLog,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Header => "header",
            Screen::Assets => "assets",
            Screen::Reservations => "reservations",
            Screen::Maintenance => "maintenance",
            Screen::Notifications => "notifications",
            Screen::AuditLog => "audit-log",
        }
    }

    /// Capability needed to open the screen at all
    pub fn entry_capability(&self) -> Capability {
        match self {
            Screen::Header
            | Screen::Assets
            | Screen::Reservations
            | Screen::Notifications => Capability::ViewAssets,
            Screen::Maintenance => Capability::ManageMaintenance,
            Screen::AuditLog => Capability::ViewAuditLogs,
        }
    }

    pub fn all() -> &'static [Screen] {
        &[
            Screen::Header,
            Screen::Assets,
            Screen::Reservations,
            Screen::Maintenance,
            Screen::Notifications,
            Screen::AuditLog,
        ]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = AssetDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::all()
            .iter()
            .copied()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| AssetDeskError::UnknownScreen(s.to_string()))
    }
}

/// Buttons, links and panels whose visibility depends on the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Control {
    NavAssets,
    NavReservations,
    NavMaintenance,
    NavAuditLog,
    AssetList,
    CreateAsset,
    EditAsset,
    DeleteAsset,
    ReserveAsset,
    MyReservations,
    AllReservations,
    ApproveReservation,
    CancelAnyReservation,
    MaintenanceList,
    ScheduleMaintenance,
    NotificationInbox,
    CreateNotification,
    AuditLogTable,
    ExportAuditLog,
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Control::NavAssets => "nav-assets",
            Control::NavReservations => "nav-reservations",
            Control::NavMaintenance => "nav-maintenance",
            Control::NavAuditLog => "nav-audit-log",
            Control::AssetList => "asset-list",
            Control::CreateAsset => "create-asset",
            Control::EditAsset => "edit-asset",
            Control::DeleteAsset => "delete-asset",
            Control::ReserveAsset => "reserve-asset",
            Control::MyReservations => "my-reservations",
            Control::AllReservations => "all-reservations",
            Control::ApproveReservation => "approve-reservation",
            Control::CancelAnyReservation => "cancel-any-reservation",
            Control::MaintenanceList => "maintenance-list",
            Control::ScheduleMaintenance => "schedule-maintenance",
            Control::NotificationInbox => "notification-inbox",
            Control::CreateNotification => "create-notification",
            Control::AuditLogTable => "audit-log-table",
            Control::ExportAuditLog => "export-audit-log",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Control {
    type Err = AssetDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VIEW_RULES
            .iter()
            .map(|r| r.control)
            .find(|control| control.name() == s)
            .ok_or_else(|| AssetDeskError::UnknownControl(s.to_string()))
    }
}

/// One row of the visibility table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRule {
    pub screen: Screen,
    pub control: Control,
    pub requires: Capability,
}

const fn rule(screen: Screen, control: Control, requires: Capability) -> ViewRule {
    ViewRule {
        screen,
        control,
        requires,
    }
}

/// Visibility rules for every screen, in display order
pub const VIEW_RULES: &[ViewRule] = &[
    rule(Screen::Header, Control::NavAssets, Capability::ViewAssets),
    rule(Screen::Header, Control::NavReservations, Capability::ViewAssets),
    rule(Screen::Header, Control::NavMaintenance, Capability::ManageMaintenance),
    rule(Screen::Header, Control::NavAuditLog, Capability::ViewAuditLogs),
    rule(Screen::Header, Control::CreateAsset, Capability::CreateAssets),
    rule(Screen::Assets, Control::AssetList, Capability::ViewAssets),
    rule(Screen::Assets, Control::CreateAsset, Capability::CreateAssets),
    rule(Screen::Assets, Control::EditAsset, Capability::EditAssets),
    rule(Screen::Assets, Control::DeleteAsset, Capability::DeleteAssets),
    rule(Screen::Assets, Control::ReserveAsset, Capability::ViewAssets),
    rule(Screen::Reservations, Control::MyReservations, Capability::ViewAssets),
    rule(Screen::Reservations, Control::AllReservations, Capability::ViewAllReservations),
    rule(Screen::Reservations, Control::ApproveReservation, Capability::ManageReservations),
    rule(Screen::Reservations, Control::CancelAnyReservation, Capability::ManageReservations),
    rule(Screen::Maintenance, Control::MaintenanceList, Capability::ManageMaintenance),
    rule(Screen::Maintenance, Control::ScheduleMaintenance, Capability::ManageMaintenance),
    rule(Screen::Notifications, Control::NotificationInbox, Capability::ViewAssets),
    rule(Screen::Notifications, Control::CreateNotification, Capability::CreateNotifications),
    rule(Screen::AuditLog, Control::AuditLogTable, Capability::ViewAuditLogs),
    rule(Screen::AuditLog, Control::ExportAuditLog, Capability::ViewAuditLogs),
];

/// Resolved visibility of one control for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlState {
    pub screen: Screen,
    pub control: Control,
    pub requires: Capability,
    pub visible: bool,
    pub reason: String,
}

impl ControlState {
    fn resolve(rule: &ViewRule, permissions: &PermissionSet) -> Self {
        let visible = permissions.allows(rule.requires);
        let reason = if visible {
            format!("granted by {}", rule.requires)
        } else {
            format!("requires {}", rule.requires)
        };
        Self {
            screen: rule.screen,
            control: rule.control,
            requires: rule.requires,
            visible,
            reason,
        }
    }
}

/// All controls of a screen with their visibility
pub fn controls_for(screen: Screen, permissions: &PermissionSet) -> Vec<ControlState> {
    VIEW_RULES
        .iter()
        .filter(|r| r.screen == screen)
        .map(|r| ControlState::resolve(r, permissions))
        .collect()
}

/// Only the controls of a screen the user may see
pub fn visible_controls(screen: Screen, permissions: &PermissionSet) -> Vec<Control> {
    controls_for(screen, permissions)
        .into_iter()
        .filter(|c| c.visible)
        .map(|c| c.control)
        .collect()
}

/// The capability a control requires; identical on every screen it appears on
pub fn required_capability(control: Control) -> Option<Capability> {
    VIEW_RULES
        .iter()
        .find(|r| r.control == control)
        .map(|r| r.requires)
}

pub fn is_control_visible(control: Control, permissions: &PermissionSet) -> bool {
    required_capability(control)
        .map(|c| permissions.allows(c))
        .unwrap_or(false)
}

/// Check access and return an error naming the missing capability
pub fn check_control(
    control: Control,
    permissions: &PermissionSet,
    current_role: &str,
) -> shared::Result<()> {
    let denied = |reason: String| ControlNotAccessibleError {
        control: control.name().to_string(),
        current_role: current_role.to_string(),
        reason,
    };

    match required_capability(control) {
        Some(capability) if permissions.allows(capability) => Ok(()),
        Some(capability) => Err(denied(format!("requires {}", capability)).into()),
        None => Err(denied("Control not registered".to_string()).into()),
    }
}

/// Screens the user may open
pub fn accessible_screens(permissions: &PermissionSet) -> Vec<Screen> {
    Screen::all()
        .iter()
        .copied()
        .filter(|s| permissions.allows(s.entry_capability()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn perms(role: Role) -> PermissionSet {
        PermissionSet::for_role(Some(role))
    }

    // ============== Table Integrity ==============

    #[test]
    fn test_every_screen_has_rules() {
        for screen in Screen::all() {
            assert!(VIEW_RULES.iter().any(|r| r.screen == *screen), "{}", screen);
        }
    }

    #[test]
    fn test_control_requires_same_capability_everywhere() {
        for rule in VIEW_RULES {
            assert_eq!(required_capability(rule.control), Some(rule.requires));
        }
    }

    #[test]
    fn test_screen_parse() {
        for screen in Screen::all() {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), *screen);
        }
        assert!(matches!(
            "settings".parse::<Screen>(),
            Err(AssetDeskError::UnknownScreen(_))
        ));
    }

    // ============== Header ==============

    #[test]
    fn test_header_create_asset_for_admin_and_facility_staff() {
        assert!(visible_controls(Screen::Header, &perms(Role::IctAdmin))
            .contains(&Control::CreateAsset));
        assert!(visible_controls(Screen::Header, &perms(Role::FacilitairMedewerker))
            .contains(&Control::CreateAsset));
        assert!(!visible_controls(Screen::Header, &perms(Role::Gebruiker))
            .contains(&Control::CreateAsset));
    }

    #[test]
    fn test_header_for_gebruiker() {
        assert_eq!(
            visible_controls(Screen::Header, &perms(Role::Gebruiker)),
            vec![Control::NavAssets, Control::NavReservations]
        );
    }

    #[test]
    fn test_header_audit_link_only_for_ict_admin() {
        for role in Role::all() {
            let visible = visible_controls(Screen::Header, &perms(*role))
                .contains(&Control::NavAuditLog);
            assert_eq!(visible, *role == Role::IctAdmin, "{}", role);
        }
    }

    #[test]
    fn test_signed_out_sees_nothing() {
        let none = PermissionSet::none();
        for screen in Screen::all() {
            assert!(visible_controls(*screen, &none).is_empty());
        }
        assert!(accessible_screens(&none).is_empty());
    }

    // ============== Control States ==============

    #[test]
    fn test_control_state_reasons() {
        let states = controls_for(Screen::Assets, &perms(Role::Gebruiker));
        let delete = states
            .iter()
            .find(|s| s.control == Control::DeleteAsset)
            .unwrap();
        assert!(!delete.visible);
        assert_eq!(delete.reason, "requires canDeleteAssets");

        let list = states.iter().find(|s| s.control == Control::AssetList).unwrap();
        assert!(list.visible);
        assert_eq!(list.reason, "granted by canViewAssets");
    }

    #[test]
    fn test_check_control() {
        let user = perms(Role::Gebruiker);
        assert!(check_control(Control::ReserveAsset, &user, "Gebruiker").is_ok());

        let err = check_control(Control::ApproveReservation, &user, "Gebruiker").unwrap_err();
        match err {
            AssetDeskError::ControlNotAccessible(err) => {
                assert_eq!(err.control, "approve-reservation");
                assert_eq!(err.current_role, "Gebruiker");
                assert_eq!(err.reason, "requires canManageReservations");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_check_control_signed_out() {
        let err = check_control(Control::NavAssets, &PermissionSet::none(), "none").unwrap_err();
        assert!(matches!(err, AssetDeskError::ControlNotAccessible(_)));
    }

    #[test]
    fn test_control_parse() {
        for rule in VIEW_RULES {
            assert_eq!(rule.control.name().parse::<Control>().unwrap(), rule.control);
        }
        assert!(matches!(
            "launch-rocket".parse::<Control>(),
            Err(AssetDeskError::UnknownControl(_))
        ));
    }

    #[test]
    fn test_accessible_screens() {
        assert_eq!(accessible_screens(&perms(Role::IctAdmin)), Screen::all().to_vec());
        assert_eq!(
            accessible_screens(&perms(Role::Gebruiker)),
            vec![
                Screen::Header,
                Screen::Assets,
                Screen::Reservations,
                Screen::Notifications
            ]
        );
        assert!(!accessible_screens(&perms(Role::FacilitairMedewerker))
            .contains(&Screen::AuditLog));
    }

    #[test]
    fn test_is_control_visible() {
        assert!(is_control_visible(Control::ExportAuditLog, &perms(Role::IctAdmin)));
        assert!(!is_control_visible(
            Control::ExportAuditLog,
            &perms(Role::FacilitairMedewerker)
        ));
    }
}
