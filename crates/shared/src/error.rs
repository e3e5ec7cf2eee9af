//! Error types for assetdesk

use thiserror::Error;

/// Error returned when a string is not one of the known roles
#[derive(Debug, Clone, Error)]
#[error("Role '{role}' not found. Available roles: {}", available_roles.join(", "))]
pub struct UnknownRoleError {
    pub role: String,
    pub available_roles: Vec<String>,
}

/// Error returned when a UI control is hidden for the current user
#[derive(Debug, Clone, Error)]
#[error("Control '{control}' is not accessible for role '{current_role}': {reason}")]
pub struct ControlNotAccessibleError {
    pub control: String,
    pub current_role: String,
    pub reason: String,
}

/// General assetdesk error type
#[derive(Debug, Error)]
pub enum AssetDeskError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error(transparent)]
    ControlNotAccessible(#[from] ControlNotAccessibleError),

    #[error("Unknown screen '{0}'")]
    UnknownScreen(String),

    #[error("Unknown control '{0}'")]
    UnknownControl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AssetDeskError>;
