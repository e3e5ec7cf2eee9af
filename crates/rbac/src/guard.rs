//! AccessGuard - Conditional rendering keyed on role membership

use serde::{Deserialize, Serialize};
use shared::{Role, RoleClaim, UserProfile};
use std::collections::BTreeSet;
use std::fmt;

use crate::capability::Capability;

/// Why a guard rendered its fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Nobody is signed in
    NoProfile,
    /// The profile's role string is not a known role
    UnrecognizedRole,
    /// The role is known but not in the allowed set
    RoleNotAllowed,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DenyReason::NoProfile => "no signed-in user",
            DenyReason::UnrecognizedRole => "unrecognized role",
            DenyReason::RoleNotAllowed => "role not allowed",
        };
        f.write_str(text)
    }
}

/// Outcome of evaluating a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Protected,
    Fallback(DenyReason),
}

impl GuardDecision {
    pub fn is_protected(&self) -> bool {
        matches!(self, GuardDecision::Protected)
    }
}

/// Declarative gate over a protected subtree
///
/// Holds nothing but its allowed roles. Every call re-evaluates against the
/// profile it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    allowed_roles: BTreeSet<Role>,
}

impl AccessGuard {
    pub fn new(allowed_roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: allowed_roles.into_iter().collect(),
        }
    }

    /// Guard open only to ICT Admin
    pub fn ict_admin_only() -> Self {
        Self::new([Role::IctAdmin])
    }

    /// Guard open to ICT Admin and Facilitair Medewerker
    pub fn staff() -> Self {
        Self::new([Role::IctAdmin, Role::FacilitairMedewerker])
    }

    /// Guard open to exactly the roles holding `capability`
    pub fn for_capability(capability: Capability) -> Self {
        Self::new(capability.allowed_roles().iter().copied())
    }

    pub fn allowed_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed_roles.iter().copied()
    }

    /// Decide whether the protected subtree may be shown
    pub fn evaluate(&self, profile: Option<&UserProfile>) -> GuardDecision {
        let decision = match profile.map(|p| &p.role) {
            None => GuardDecision::Fallback(DenyReason::NoProfile),
            Some(RoleClaim::Unrecognized(_)) => {
                GuardDecision::Fallback(DenyReason::UnrecognizedRole)
            }
            Some(RoleClaim::Known(role)) if self.allowed_roles.contains(role) => {
                GuardDecision::Protected
            }
            Some(RoleClaim::Known(_)) => GuardDecision::Fallback(DenyReason::RoleNotAllowed),
        };

        if let GuardDecision::Fallback(reason) = decision {
            tracing::debug!(
                role = profile.map(|p| p.role.as_str()).unwrap_or("none"),
                %reason,
                "access guard rendered fallback"
            );
        }
        decision
    }

    pub fn permits(&self, profile: Option<&UserProfile>) -> bool {
        self.evaluate(profile).is_protected()
    }

    /// Render `protected` when permitted, otherwise `fallback`
    pub fn render<T>(
        &self,
        profile: Option<&UserProfile>,
        protected: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.permits(profile) {
            protected()
        } else {
            fallback()
        }
    }

    /// Render `protected` when permitted, otherwise nothing
    pub fn render_or_nothing<T>(
        &self,
        profile: Option<&UserProfile>,
        protected: impl FnOnce() -> T,
    ) -> Option<T> {
        self.render(profile, || Some(protected()), || None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: &str) -> UserProfile {
        UserProfile::new(role)
    }

    #[test]
    fn test_allowed_role_renders_protected() {
        let guard = AccessGuard::new([Role::IctAdmin]);
        let out = guard.render(Some(&profile("ICT Admin")), || "protected", || "fallback");
        assert_eq!(out, "protected");
    }

    #[test]
    fn test_disallowed_role_renders_fallback() {
        let guard = AccessGuard::new([Role::IctAdmin]);
        let out = guard.render(Some(&profile("Gebruiker")), || "protected", || "fallback");
        assert_eq!(out, "fallback");
        assert_eq!(
            guard.evaluate(Some(&profile("Gebruiker"))),
            GuardDecision::Fallback(DenyReason::RoleNotAllowed)
        );
    }

    #[test]
    fn test_absent_profile_always_falls_back() {
        let guards = [
            AccessGuard::new(Vec::<Role>::new()),
            AccessGuard::ict_admin_only(),
            AccessGuard::staff(),
            AccessGuard::new(Role::all().iter().copied()),
        ];
        for guard in &guards {
            assert_eq!(
                guard.evaluate(None),
                GuardDecision::Fallback(DenyReason::NoProfile)
            );
        }
    }

    #[test]
    fn test_empty_allowed_set_always_falls_back() {
        let guard = AccessGuard::new(Vec::<Role>::new());
        for role in Role::all() {
            assert!(!guard.permits(Some(&UserProfile::new(*role))));
        }
    }

    #[test]
    fn test_unrecognized_role_falls_back() {
        let guard = AccessGuard::new(Role::all().iter().copied());
        assert_eq!(
            guard.evaluate(Some(&profile("unknown-role"))),
            GuardDecision::Fallback(DenyReason::UnrecognizedRole)
        );
    }

    #[test]
    fn test_default_fallback_renders_nothing() {
        let guard = AccessGuard::ict_admin_only();
        assert_eq!(guard.render_or_nothing(Some(&profile("Gebruiker")), || 1), None);
        assert_eq!(guard.render_or_nothing(Some(&profile("ICT Admin")), || 1), Some(1));
    }

    #[test]
    fn test_fallback_branch_not_run_when_permitted() {
        let guard = AccessGuard::staff();
        let mut fallback_ran = false;
        guard.render(
            Some(&profile("Facilitair Medewerker")),
            || (),
            || fallback_ran = true,
        );
        assert!(!fallback_ran);
    }

    // ============== Specializations ==============

    #[test]
    fn test_ict_admin_only() {
        let guard = AccessGuard::ict_admin_only();
        assert_eq!(guard.allowed_roles().collect::<Vec<_>>(), vec![Role::IctAdmin]);
    }

    #[test]
    fn test_staff_guard() {
        let guard = AccessGuard::staff();
        assert!(guard.permits(Some(&profile("ICT Admin"))));
        assert!(guard.permits(Some(&profile("Facilitair Medewerker"))));
        assert!(!guard.permits(Some(&profile("Facilitair Admin"))));
        assert!(!guard.permits(Some(&profile("Gebruiker"))));
    }

    #[test]
    fn test_capability_guard_matches_derivation() {
        use crate::permissions::PermissionSet;

        for capability in Capability::all() {
            let guard = AccessGuard::for_capability(*capability);
            for role in Role::all() {
                let profile = UserProfile::new(*role);
                assert_eq!(
                    guard.permits(Some(&profile)),
                    PermissionSet::for_profile(Some(&profile)).allows(*capability),
                    "{} / {}",
                    role,
                    capability
                );
            }
        }
    }

    #[test]
    fn test_guard_reevaluates_on_new_profile() {
        let guard = AccessGuard::ict_admin_only();
        let mut current = profile("Gebruiker");
        assert!(!guard.permits(Some(&current)));

        current.role = RoleClaim::Known(Role::IctAdmin);
        assert!(guard.permits(Some(&current)));
    }
}
