//! assetdesk CLI library: commands, rendering and the interactive session

pub mod commands;
pub mod interactive;
pub mod output;

use shared::{AppConfig, UserProfile};

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Signed-in user, `None` when acting as signed out
    pub profile: Option<UserProfile>,
    pub config: AppConfig,
    /// Print JSON instead of text
    pub json: bool,
}
