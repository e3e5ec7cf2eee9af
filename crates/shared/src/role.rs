//! Role model
//!
//! The set of roles is closed. Role strings coming from the auth backend are
//! parsed into a [`RoleClaim`], which keeps anything outside the set as an
//! explicit [`RoleClaim::Unrecognized`] value instead of guessing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRoleError;

/// A user's authority level within the asset desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// ICT department administrator
    #[serde(rename = "ICT Admin")]
    IctAdmin,

    /// Facility management administrator
    #[serde(rename = "Facilitair Admin")]
    FacilitairAdmin,

    /// Facility management staff member
    #[serde(rename = "Facilitair Medewerker")]
    FacilitairMedewerker,

    /// Regular employee
    #[serde(rename = "Gebruiker")]
    Gebruiker,
}

impl Role {
    /// The exact string stored on the user profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::IctAdmin => "ICT Admin",
            Role::FacilitairAdmin => "Facilitair Admin",
            Role::FacilitairMedewerker => "Facilitair Medewerker",
            Role::Gebruiker => "Gebruiker",
        }
    }

    /// Short description shown in role listings
    pub fn description(&self) -> &'static str {
        match self {
            Role::IctAdmin => "Manages all assets, reservations and the audit log",
            Role::FacilitairAdmin => "Facility administrator",
            Role::FacilitairMedewerker => "Handles assets, reservations and maintenance",
            Role::Gebruiker => "Browses assets and requests reservations",
        }
    }

    /// Get all roles (useful for iteration)
    pub fn all() -> &'static [Role] {
        &[
            Role::IctAdmin,
            Role::FacilitairAdmin,
            Role::FacilitairMedewerker,
            Role::Gebruiker,
        ]
    }

    /// Parse a comma-separated role list, rejecting any unknown entry
    ///
    /// Entries are trimmed and blank ones skipped; names are otherwise matched
    /// exactly.
    pub fn parse_list<S: AsRef<str>>(items: &[S]) -> crate::Result<Vec<Role>> {
        let mut roles = Vec::new();
        for item in items {
            for name in item.as_ref().split(',').map(str::trim).filter(|n| !n.is_empty()) {
                roles.push(name.parse::<Role>()?);
            }
        }
        Ok(roles)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRoleError {
                role: s.to_string(),
                available_roles: Role::all().iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

/// A role string as delivered by the auth backend
///
/// Parsing is total: strings outside the known set become
/// [`RoleClaim::Unrecognized`] and are denied everything downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleClaim {
    Known(Role),
    Unrecognized(String),
}

impl RoleClaim {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(_) => RoleClaim::Unrecognized(raw.to_string()),
        }
    }

    /// The recognized role, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.as_str(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, RoleClaim::Known(_))
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}

impl From<String> for RoleClaim {
    fn from(raw: String) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(_) => RoleClaim::Unrecognized(raw),
        }
    }
}

impl From<&str> for RoleClaim {
    fn from(raw: &str) -> Self {
        RoleClaim::parse(raw)
    }
}

impl From<RoleClaim> for String {
    fn from(claim: RoleClaim) -> Self {
        match claim {
            RoleClaim::Known(role) => role.as_str().to_string(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RoleClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
