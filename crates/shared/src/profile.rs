//! User profile as delivered by the auth backend

use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleClaim};

/// Profile of the signed-in user
///
/// Owned by the auth backend: created at sign-up, fetched at session start,
/// absent when nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend user id
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Role string exactly as stored by the backend
    pub role: RoleClaim,
}

impl UserProfile {
    /// Create a profile carrying only a role claim
    pub fn new(role: impl Into<RoleClaim>) -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            display_name: None,
            role: role.into(),
        }
    }

    /// Builder: set the backend id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// The recognized role, if the stored string is one
    pub fn role(&self) -> Option<Role> {
        self.role.role()
    }

    /// Name to show in headers: display name, then email, then id
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ if !self.email.is_empty() => &self.email,
            _ => &self.id,
        }
    }

    /// Load a profile from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&content)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_profile_parse_backend_json() {
        let json = r#"{
            "id": "7f1c",
            "email": "an@example.org",
            "displayName": "An de Vries",
            "role": "Facilitair Medewerker"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role(), Some(Role::FacilitairMedewerker));
        assert_eq!(profile.label(), "An de Vries");
    }

    #[test]
    fn test_profile_with_only_role() {
        let profile: UserProfile = serde_json::from_str(r#"{"role": "Gebruiker"}"#).unwrap();
        assert_eq!(profile.role(), Some(Role::Gebruiker));
        assert!(profile.id.is_empty());
        assert!(profile.display_name.is_none());
    }

    #[test]
    fn test_profile_unknown_role_is_kept() {
        let profile: UserProfile = serde_json::from_str(r#"{"role": "root"}"#).unwrap();
        assert_eq!(profile.role(), None);
        assert_eq!(profile.role.as_str(), "root");
    }

    #[test]
    fn test_profile_missing_role_is_an_error() {
        let result: Result<UserProfile, _> = serde_json::from_str(r#"{"email": "x@y.z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_label_fallbacks() {
        let profile = UserProfile::new(Role::Gebruiker).with_id("u1");
        assert_eq!(profile.label(), "u1");

        let profile = profile.with_email("u1@example.org");
        assert_eq!(profile.label(), "u1@example.org");
    }

    #[test]
    fn test_profile_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"role": "ICT Admin", "email": "it@example.org"}}"#).unwrap();

        let profile = UserProfile::from_file(file.path()).unwrap();
        assert_eq!(profile.role(), Some(Role::IctAdmin));
    }
}
