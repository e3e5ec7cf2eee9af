//! CLI Commands

pub mod roles;
pub mod permissions;
pub mod guard;
pub mod view;
pub mod check;

pub use roles::{MatrixCommand, RolesCommand};
pub use permissions::PermissionsCommand;
pub use guard::GuardCommand;
pub use view::ViewCommand;
pub use check::CheckCommand;

use shared::{RoleClaim, UserProfile};
use std::path::Path;

/// Build the acting profile from `--profile` or `--role`
///
/// A profile file wins over a role. Unknown role strings are kept as-is so
/// the output shows them being denied.
pub fn resolve_profile(
    role: Option<&str>,
    profile_path: Option<&Path>,
) -> anyhow::Result<Option<UserProfile>> {
    if let Some(path) = profile_path {
        return Ok(Some(UserProfile::from_file(path)?));
    }

    Ok(role.map(|raw| {
        let claim = RoleClaim::parse(raw);
        if !claim.is_recognized() {
            tracing::warn!(role = raw, "role is not recognized; every check will deny");
        }
        UserProfile::new(claim)
    }))
}
