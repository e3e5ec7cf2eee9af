//! Session - Explicit holder for the signed-in user's profile
//!
//! The auth backend fetches the profile asynchronously; the session only sees
//! the result as a transition between absent and present (or between two
//! profiles). Permissions are never stored: every read derives them afresh
//! from the profile held at that moment.

use serde::{Deserialize, Serialize};
use shared::{RoleClaim, UserProfile};

use crate::guard::{AccessGuard, GuardDecision};
use crate::permissions::PermissionSet;
use crate::views::{self, ControlState, Screen};

/// Description of a profile transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChange {
    pub previous_role: Option<RoleClaim>,
    pub current_role: Option<RoleClaim>,
}

impl ProfileChange {
    /// Whether the role actually changed
    pub fn role_changed(&self) -> bool {
        self.previous_role != self.current_role
    }
}

fn role_label(role: Option<&RoleClaim>) -> &str {
    role.map(|r| r.as_str()).unwrap_or("none")
}

/// Current user context passed explicitly to views
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<UserProfile>,
}

impl Session {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self { profile: None }
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Replace the profile with whatever the auth backend reports now
    pub fn update_profile(&mut self, profile: Option<UserProfile>) -> ProfileChange {
        let previous_role = self.profile.as_ref().map(|p| p.role.clone());
        let current_role = profile.as_ref().map(|p| p.role.clone());
        self.profile = profile;

        let change = ProfileChange {
            previous_role,
            current_role,
        };
        if change.role_changed() {
            tracing::info!(
                from = role_label(change.previous_role.as_ref()),
                to = role_label(change.current_role.as_ref()),
                "session role changed"
            );
        }
        change
    }

    pub fn sign_in(&mut self, profile: UserProfile) -> ProfileChange {
        self.update_profile(Some(profile))
    }

    pub fn sign_out(&mut self) -> ProfileChange {
        self.update_profile(None)
    }

    /// Derive permissions for the current profile
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::for_profile(self.profile())
    }

    pub fn evaluate(&self, guard: &AccessGuard) -> GuardDecision {
        guard.evaluate(self.profile())
    }

    pub fn controls_for(&self, screen: Screen) -> Vec<ControlState> {
        views::controls_for(screen, &self.permissions())
    }

    /// Role string for logs and error messages
    pub fn role_label(&self) -> &str {
        role_label(self.profile.as_ref().map(|p| &p.role))
    }
}
